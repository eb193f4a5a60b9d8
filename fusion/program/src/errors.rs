use anchor_lang::prelude::*;

#[error_code]
pub enum FusionError {
    #[msg("Declared counts do not match the supplied ingredients or output items")]
    LengthMismatch,
    #[msg("Signer does not hold the mint authority of an output mint")]
    UnauthorizedMintAuthority,
    #[msg("No valid output authority address could be derived")]
    AddressDerivationExhausted,
    #[msg("Ingredient token account does not match the recorded mint")]
    IngredientMintMismatch,
    #[msg("Ingredient token balance is below the required amount")]
    InsufficientIngredientBalance,
    #[msg("Burned ingredient accounts must be writable")]
    IngredientNotWritable,
    #[msg("Output account does not match the recorded mint")]
    OutputAccountMintMismatch,
    #[msg("Collectible custody account is missing or malformed")]
    MissingCollectibleCustodyAccount,
    #[msg("Output authority does not match the formula bump")]
    AuthorityMismatch,
    #[msg("Too many ingredients or output items")]
    TooManyEntries,
    #[msg("Ingredient and output amounts must be greater than zero")]
    ZeroAmount,
    #[msg("Account does not have correct owner")]
    IncorrectOwner,
    #[msg("Ingredient token account is not owned by the crafter")]
    IngredientOwnerMismatch,
    #[msg("Ingredient accounts are missing")]
    MissingIngredientAccount,
    #[msg("Output accounts are missing")]
    MissingOutputAccount,
    #[msg("Output accounts must be writable")]
    OutputAccountNotWritable,
    #[msg("Collectible custody account holds no unit to disburse")]
    CollectibleSupplyExhausted,
    #[msg("Invalid token metadata program")]
    InvalidTokenMetadataProgram,
    #[msg("Invalid remaining accounts length")]
    InvalidRemainingAccountsLength,
    #[msg("Craft phase transition is not allowed")]
    InvalidPhaseTransition,
    #[msg("Numerical overflow error")]
    NumericalOverflow,
}
