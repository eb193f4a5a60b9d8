// Seed used to derive the output authority PDA of a formula.
pub const AUTHORITY_SEED: &str = "crafting";

// Upper bounds keep a formula account within a single CPI allocation.
pub const MAX_INGREDIENTS: usize = 32;
pub const MAX_OUTPUT_ITEMS: usize = 32;

// Remaining accounts consumed per ingredient: token account + mint.
pub const INGREDIENT_ACCOUNTS: usize = 2;

// Remaining accounts consumed per output at craft time.
pub const FUNGIBLE_OUTPUT_ACCOUNTS: usize = 2;
pub const COLLECTIBLE_OUTPUT_ACCOUNTS: usize = 4;
pub const PRINT_EDITION_ACCOUNTS: usize = 7;

// Remaining accounts consumed per output at definition time.
pub const FUNGIBLE_DEFINITION_ACCOUNTS: usize = 1;
pub const COLLECTIBLE_DEFINITION_ACCOUNTS: usize = 3;
