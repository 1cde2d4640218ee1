pub mod content;
pub mod editor;
pub mod notification;
pub mod seeder;
pub mod storage;
pub mod views;
