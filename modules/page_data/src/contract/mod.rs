//! Contract layer - component records, errors and the transport seam
//!
//! Models carry serde derives: their JSON shape is the wire format.

pub mod client;
pub mod error;
pub mod model;

pub use client::HttpTransport;
pub use error::{AccessError, ComponentError};
pub use model::{
    Component, ComponentBase, ComponentKind, CoreBody, CoreComponent, CoreDropdown,
    CoreDropdownItem, CoreFooter, CoreFooterColumn, CoreFooterLink, CoreFooterPicture,
    CoreFooterText, CoreForm, CoreHeader, CoreHeading, CoreInput, CoreNavbar, CoreNavbarItem,
    CoreSection, CoreWindow, Language, NavbarAttrs, ParentComponent,
};
