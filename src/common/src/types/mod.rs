pub mod envelope;
pub mod fields;
pub mod payload;
pub mod record;
pub mod severity;
