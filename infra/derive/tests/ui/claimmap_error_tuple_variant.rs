use claimmap_derive::claimmap_error;

#[claimmap_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
