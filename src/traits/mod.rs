mod transport;

pub use transport::DataApiTransport;
