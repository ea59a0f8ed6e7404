mod editing;
mod identity;
mod listing;
