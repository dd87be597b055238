pub mod util;

pub use util::{load_options, split_csv};
