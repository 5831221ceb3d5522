// Header names are case-insensitive; `http` stores them lower-cased.
pub const SLURM_USER_NAME: &str = "x-slurm-user-name";
pub const SLURM_USER_TOKEN: &str = "x-slurm-user-token";
