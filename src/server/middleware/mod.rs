mod rebuild;

pub use rebuild::rebuild_on_request;
