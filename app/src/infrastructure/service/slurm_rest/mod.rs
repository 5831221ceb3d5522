mod client;

pub use self::client::SlurmRestClient;

#[cfg(test)]
pub use self::client::tests as testing;
