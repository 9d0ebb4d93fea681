pub mod hero_store;
