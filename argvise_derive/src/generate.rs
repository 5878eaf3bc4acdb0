mod field;
mod store;
