//! Meeting provisioning

mod http;

pub use http::HttpMeetingProvisioner;
