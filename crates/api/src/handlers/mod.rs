pub mod question;
pub mod tryout;
