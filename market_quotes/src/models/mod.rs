pub mod profile;
pub mod quote;
pub mod stock_record;
