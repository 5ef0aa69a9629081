pub mod ingredient;
