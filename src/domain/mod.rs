mod contact_request;
mod email_address;
mod service_offering;

pub use contact_request::ContactRequest;
pub use email_address::EmailAddress;
pub use service_offering::ServiceOffering;
