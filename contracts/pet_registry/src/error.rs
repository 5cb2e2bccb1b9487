use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    ConfigNotFound = 2,
    PetTokenNotSet = 3,
    Unauthorized = 4,
    NotFound = 5,
    AlreadyMember = 6,
    SelfJoinForbidden = 7,
    TribeFull = 8,
    NotMember = 9,
    InvalidMemberIndex = 10,
    InsufficientHealth = 11,
    InvalidStats = 12,
    InvalidName = 13,
    InvalidTrait = 14,
    TooManyTraits = 15,
    RecipientInTribe = 16,
    CareOnCooldown = 17,
    MaxLevelReached = 18,
    MetadataTooLarge = 19,
    Overflow = 20,
    InvalidMetadata = 21,
}
