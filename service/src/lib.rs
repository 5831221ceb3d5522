pub mod slurm_view;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        slurm_view::SlurmViewServiceImpl,
    };
}
