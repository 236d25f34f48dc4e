//! Common test utilities: page fixtures, stub transport, recording reporter
#![allow(dead_code)]

use async_trait::async_trait;
use page_data::contract::*;
use page_data::ErrorReporter;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("page_data=debug")
        .try_init();
}

// ===== Fixtures =====

pub fn base(id: &str, kind: ComponentKind, order: u32) -> ComponentBase {
    ComponentBase::new(id, format!("{} {}", kind, id), kind).with_order(order)
}

pub fn sample_dropdown() -> CoreDropdown {
    CoreDropdown {
        base: base("dd-1", ComponentKind::Dropdown, 0),
        components: vec![
            CoreDropdownItem {
                base: base("dd-item-2", ComponentKind::DropdownItem, 1),
                text: "Pricing".into(),
                icon: "tag".into(),
                url: "/pricing".into(),
            }
            .into(),
            CoreDropdownItem {
                base: base("dd-item-1", ComponentKind::DropdownItem, 0),
                text: "Features".into(),
                icon: "star".into(),
                url: "/features".into(),
            }
            .into(),
        ],
    }
}

pub fn sample_navbar() -> CoreNavbar {
    CoreNavbar {
        base: base("nav-1", ComponentKind::Navbar, 1),
        components: vec![
            CoreNavbarItem {
                base: base("nav-item-1", ComponentKind::NavbarItem, 0),
                is_minimized: false,
                text: "Home".into(),
                icon: "home".into(),
                item_type: "link".into(),
                tooltip: "Go home".into(),
                style: "primary".into(),
                url: "/".into(),
                dropdown: None,
            }
            .into(),
            CoreNavbarItem {
                base: base("nav-item-2", ComponentKind::NavbarItem, 1),
                is_minimized: true,
                text: "Product".into(),
                item_type: "dropdown".into(),
                dropdown: Some(sample_dropdown()),
                ..Default::default()
            }
            .into(),
        ],
        attrs: NavbarAttrs {
            brand: "Acme".into(),
            brand_link: "/".into(),
        },
    }
}

pub fn sample_form() -> CoreForm {
    CoreForm {
        base: base("form-1", ComponentKind::Form, 1),
        components: vec![
            CoreInput {
                base: base("input-1", ComponentKind::Input, 0),
                input_type: "text".into(),
                placeholder: "Name".into(),
                required: true,
                ..Default::default()
            }
            .into(),
            CoreInput {
                base: base("input-2", ComponentKind::Input, 1),
                input_type: "email".into(),
                pattern: r"^[^@\s]+@[^@\s]+$".into(),
                placeholder: "Email".into(),
                required: true,
                icon: "mail".into(),
                ..Default::default()
            }
            .into(),
        ],
        title: "Contact us".into(),
        text: "We answer within a day".into(),
        submit_url: "/api/contact".into(),
        method: "POST".into(),
    }
}

pub fn sample_footer() -> CoreFooter {
    CoreFooter {
        base: base("footer-1", ComponentKind::Footer, 3),
        components: vec![CoreFooterColumn {
            base: base("col-1", ComponentKind::FooterColumn, 0),
            components: vec![
                CoreFooterLink {
                    base: base("link-1", ComponentKind::FooterLink, 0),
                    text: "Imprint".into(),
                    url: "/imprint".into(),
                }
                .into(),
                CoreFooterText {
                    base: base("text-1", ComponentKind::FooterText, 1),
                    text: "© Acme".into(),
                    url: String::new(),
                }
                .into(),
                CoreFooterPicture {
                    base: base("pic-1", ComponentKind::FooterPicture, 2),
                    text: "logo".into(),
                    url: "/static/logo.png".into(),
                }
                .into(),
            ],
            title: "Company".into(),
            grid: "col-4".into(),
        }
        .into()],
    }
}

/// Window with header, navbar, body (heading, section, form) and footer
pub fn sample_window() -> CoreWindow {
    let header = CoreHeader {
        base: base("header-1", ComponentKind::Header, 0),
        components: vec![CoreSection {
            base: base("header-section-1", ComponentKind::Section, 0),
            title: "Welcome".into(),
            ..Default::default()
        }
        .into()],
        title: "Acme".into(),
        motto: "Things that work".into(),
        logo_filename: "logo.svg".into(),
        picture_filename: "hero.jpg".into(),
    };

    let body = CoreBody {
        base: base("body-1", ComponentKind::Body, 2),
        components: vec![
            CoreHeading {
                base: base("heading-1", ComponentKind::Heading, 0),
                components: vec![CoreSection {
                    base: base("section-1", ComponentKind::Section, 0),
                    title: "About".into(),
                    text: "Since 1949".into(),
                    text_align: "left".into(),
                    link: "/about".into(),
                    link_text: "More".into(),
                    background_picture_filename: "bg.jpg".into(),
                    picture_filename: "team.jpg".into(),
                    picture_position: "right".into(),
                }
                .into()],
                title: "Who we are".into(),
                text: String::new(),
            }
            .into(),
            sample_form().into(),
        ],
    };

    CoreWindow {
        base: base("window-1", ComponentKind::Window, 0),
        components: vec![
            header.into(),
            sample_navbar().into(),
            body.into(),
            sample_footer().into(),
        ],
        window_type: "page".into(),
        tab_title: "Acme - Home".into(),
        slug: "home".into(),
        theme: "light".into(),
        language: Language {
            code: "en".into(),
            direction: "ltr".into(),
            icon: "flag-gb".into(),
            name: "English".into(),
        },
    }
}

// ===== Reporter =====

/// Reporter that records (operation, url) for each failure
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, operation: &str, error: &AccessError) {
        self.reports
            .lock()
            .push((operation.to_string(), error.url.clone()));
    }
}

// ===== Transport =====

/// In-memory transport with canned responses per URL
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<HashMap<String, Result<Value, String>>>,
    posted: Mutex<Vec<(String, Value)>>,
}

impl StubTransport {
    pub fn respond(&self, url: &str, body: Value) {
        self.responses.lock().insert(url.to_string(), Ok(body));
    }

    pub fn fail(&self, url: &str, message: &str) {
        self.responses
            .lock()
            .insert(url.to_string(), Err(message.to_string()));
    }

    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().clone()
    }

    fn lookup(&self, url: &str) -> Result<Value, AccessError> {
        match self.responses.lock().get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(AccessError::new(url, message.clone())),
            None => Err(AccessError::new(url, "no route")),
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get_json(&self, url: &str) -> Result<Value, AccessError> {
        self.lookup(url)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, AccessError> {
        self.posted.lock().push((url.to_string(), body.clone()));
        self.lookup(url)
    }
}
