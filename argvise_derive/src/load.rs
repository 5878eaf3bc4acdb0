mod attribute;
mod field;
mod store;

const ATTRIBUTE: &str = "argvise";
