//! Settings tab state: credential forms and their validation flow.

pub mod credentials;

pub use credentials::{
    CredentialField, CredentialForm, PendingTest, TestStart, TestState, TestTicket,
};
