use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use soroban_sdk::{Env, String};

use crate::{error::ContractError, storage::Pet};

pub const MAX_LABEL_LENGTH: u32 = 32;

pub const URI_PREFIX: &str = "data:application/json;utf8,";

const DOCUMENT_CAPACITY: usize = 2048;
// every document byte encodes to at most three
const URI_CAPACITY: usize = URI_PREFIX.len() + 3 * DOCUMENT_CAPACITY;

// the set `encodeURIComponent` escapes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Names and traits are 1..=32 bytes of UTF-8 without control characters.
pub fn is_valid_label(value: &String) -> bool {
    let len = value.len();
    if len == 0 || len > MAX_LABEL_LENGTH {
        return false;
    }

    let mut buf = [0u8; MAX_LABEL_LENGTH as usize];
    let bytes = &mut buf[..len as usize];
    value.copy_into_slice(bytes);

    core::str::from_utf8(bytes).is_ok() && !bytes.iter().any(|b| *b < 0x20 || *b == 0x7f)
}

/// Fixed-capacity buffer the token URI document is rendered into.
struct JsonWriter {
    buf: [u8; DOCUMENT_CAPACITY],
    len: usize,
}

impl JsonWriter {
    fn new() -> Self {
        Self {
            buf: [0u8; DOCUMENT_CAPACITY],
            len: 0,
        }
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), ContractError> {
        let end = self.len + bytes.len();
        if end > DOCUMENT_CAPACITY {
            return Err(ContractError::MetadataTooLarge);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;

        Ok(())
    }

    fn push_str(&mut self, value: &str) -> Result<(), ContractError> {
        self.push_bytes(value.as_bytes())
    }

    fn push_u64(&mut self, mut value: u64) -> Result<(), ContractError> {
        let mut digits = [0u8; 20];
        let mut idx = digits.len();
        loop {
            idx -= 1;
            digits[idx] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.push_bytes(&digits[idx..])
    }

    // labels are validated on the way in, only quotes and backslashes need escaping
    fn push_label(&mut self, value: &String) -> Result<(), ContractError> {
        let len = value.len() as usize;
        if len > MAX_LABEL_LENGTH as usize {
            return Err(ContractError::MetadataTooLarge);
        }
        let mut buf = [0u8; MAX_LABEL_LENGTH as usize];
        value.copy_into_slice(&mut buf[..len]);

        self.push_bytes(b"\"")?;
        for byte in buf[..len].iter() {
            match byte {
                b'"' => self.push_bytes(b"\\\"")?,
                b'\\' => self.push_bytes(b"\\\\")?,
                _ => self.push_bytes(&[*byte])?,
            }
        }
        self.push_bytes(b"\"")
    }

    fn push_attribute(&mut self, trait_type: &str, value: u64) -> Result<(), ContractError> {
        self.push_str("{\"trait_type\":\"")?;
        self.push_str(trait_type)?;
        self.push_str("\",\"value\":")?;
        self.push_u64(value)?;
        self.push_str("}")
    }

    /// Percent-encodes the rendered document behind the `utf8` data URI prefix.
    fn finish(&self, env: &Env) -> Result<String, ContractError> {
        let document =
            core::str::from_utf8(&self.buf[..self.len]).map_err(|_| ContractError::InvalidMetadata)?;

        let mut uri = [0u8; URI_CAPACITY];
        let mut len = URI_PREFIX.len();
        uri[..len].copy_from_slice(URI_PREFIX.as_bytes());

        for chunk in utf8_percent_encode(document, URI_COMPONENT) {
            let end = len + chunk.len();
            if end > URI_CAPACITY {
                return Err(ContractError::MetadataTooLarge);
            }
            uri[len..end].copy_from_slice(chunk.as_bytes());
            len = end;
        }

        let uri = core::str::from_utf8(&uri[..len]).map_err(|_| ContractError::InvalidMetadata)?;

        Ok(String::from_str(env, uri))
    }
}

/// Renders `pet` as a `data:application/json;utf8,` URI whose percent-encoded
/// JSON carries `name`, `description` and `attributes`.
pub fn token_uri(env: &Env, pet: &Pet) -> Result<String, ContractError> {
    let mut writer = JsonWriter::new();

    writer.push_str("{\"name\":")?;
    writer.push_label(&pet.name)?;
    writer.push_str(",\"description\":\"PetBase pet #")?;
    writer.push_u64(pet.id)?;
    writer.push_str("\",\"attributes\":[")?;
    writer.push_attribute("Health", pet.health.into())?;
    writer.push_str(",")?;
    writer.push_attribute("Happiness", pet.happiness.into())?;
    writer.push_str(",")?;
    writer.push_attribute("Level", pet.level.into())?;
    for trait_name in pet.traits.iter() {
        writer.push_str(",{\"trait_type\":\"Trait\",\"value\":")?;
        writer.push_label(&trait_name)?;
        writer.push_str("}")?;
    }
    writer.push_str("]}")?;

    writer.finish(env)
}
