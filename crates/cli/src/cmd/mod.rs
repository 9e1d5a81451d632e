pub mod age;
pub mod doctor;
pub mod output;
