//! Terminal study pages for classic data structures and algorithms: a
//! queue-based parking garage, seven animated sorting algorithms,
//! Tic-Tac-Toe, and Towers of Hanoi.

pub mod audio;
pub mod cli;
pub mod config;
pub mod garage;
pub mod hanoi;
pub mod logging;
pub mod shutdown;
pub mod sorting;
pub mod tictactoe;
pub mod ui;
