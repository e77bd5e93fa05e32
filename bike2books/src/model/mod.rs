pub mod dataset;
pub mod locate;
pub mod neighborhood;
pub mod sample;
pub mod travel;
