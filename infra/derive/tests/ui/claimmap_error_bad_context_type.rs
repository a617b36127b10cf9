use claimmap_derive::claimmap_error;

#[claimmap_error]
pub enum DemoError {
    #[error("Bad path: {message}")]
    BadPath { message: String, context: Option<String> },
}

fn main() {}
