pub mod rebrickable;

pub use rebrickable::RebrickableAdapter;
