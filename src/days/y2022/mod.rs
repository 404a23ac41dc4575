pub mod day01;
