//! Component records for page building blocks
//!
//! Every record embeds [`ComponentBase`] flattened, so the JSON shape is the
//! base fields followed by the record's own fields. Parents add a
//! `components` list of [`Component`]s. All fields default when absent.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// ===== Base fields =====

/// Fields shared by every component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentBase {
    /// Unique identifier within a page tree
    pub id: String,
    /// Display name
    pub name: String,
    /// Type tag, one of [`ComponentKind::TAGS`]
    pub component_type: String,
    /// Hidden components are skipped by [`ParentComponent::visible_children`]
    pub is_hidden: bool,
    /// Sort key among siblings
    pub order: u32,
}

impl ComponentBase {
    /// Create visible base fields with order 0
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type: kind.as_str().to_string(),
            is_hidden: false,
            order: 0,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }
}

// ===== Component kinds =====

/// Closed set of component kinds, keyed by the `component_type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Window,
    Body,
    Navbar,
    NavbarItem,
    Dropdown,
    DropdownItem,
    Footer,
    FooterColumn,
    FooterLink,
    FooterText,
    FooterPicture,
    Header,
    Heading,
    Section,
    Form,
    Input,
}

impl ComponentKind {
    /// Every accepted `component_type` tag
    pub const TAGS: &'static [&'static str] = &[
        "window",
        "body",
        "navbar",
        "navbar_item",
        "dropdown",
        "dropdown_item",
        "footer",
        "footer_column",
        "footer_link",
        "footer_text",
        "footer_picture",
        "header",
        "heading",
        "section",
        "form",
        "input",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Body => "body",
            Self::Navbar => "navbar",
            Self::NavbarItem => "navbar_item",
            Self::Dropdown => "dropdown",
            Self::DropdownItem => "dropdown_item",
            Self::Footer => "footer",
            Self::FooterColumn => "footer_column",
            Self::FooterLink => "footer_link",
            Self::FooterText => "footer_text",
            Self::FooterPicture => "footer_picture",
            Self::Header => "header",
            Self::Heading => "heading",
            Self::Section => "section",
            Self::Form => "form",
            Self::Input => "input",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "window" => Self::Window,
            "body" => Self::Body,
            "navbar" => Self::Navbar,
            "navbar_item" => Self::NavbarItem,
            "dropdown" => Self::Dropdown,
            "dropdown_item" => Self::DropdownItem,
            "footer" => Self::Footer,
            "footer_column" => Self::FooterColumn,
            "footer_link" => Self::FooterLink,
            "footer_text" => Self::FooterText,
            "footer_picture" => Self::FooterPicture,
            "header" => Self::Header,
            "heading" => Self::Heading,
            "section" => Self::Section,
            "form" => Self::Form,
            "input" => Self::Input,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether records of this kind own a `components` list
    pub fn is_parent(self) -> bool {
        matches!(
            self,
            Self::Window
                | Self::Body
                | Self::Navbar
                | Self::Dropdown
                | Self::Footer
                | Self::FooterColumn
                | Self::Header
                | Self::Heading
                | Self::Form
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Capability traits =====

/// Access to the shared base fields
pub trait CoreComponent {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Kind of the concrete record, independent of its `component_type` tag
    fn kind(&self) -> ComponentKind;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn order(&self) -> u32 {
        self.base().order
    }

    fn is_hidden(&self) -> bool {
        self.base().is_hidden
    }
}

/// Components that own an ordered list of children
pub trait ParentComponent: CoreComponent {
    /// Children in stored order
    fn children(&self) -> &[Component];

    fn children_mut(&mut self) -> &mut Vec<Component>;

    /// Children sorted by `order`; ties keep their stored order
    fn sorted_children(&self) -> Vec<&Component> {
        let mut children: Vec<&Component> = self.children().iter().collect();
        children.sort_by_key(|child| child.order());
        children
    }

    /// Sorted children without the hidden ones
    fn visible_children(&self) -> Vec<&Component> {
        self.sorted_children()
            .into_iter()
            .filter(|child| !child.is_hidden())
            .collect()
    }

    fn push_child(&mut self, child: impl Into<Component>)
    where
        Self: Sized,
    {
        self.children_mut().push(child.into());
    }
}

macro_rules! core_component {
    ($($record:ident => $kind:ident),+ $(,)?) => {
        $(
            impl CoreComponent for $record {
                fn base(&self) -> &ComponentBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut ComponentBase {
                    &mut self.base
                }

                fn kind(&self) -> ComponentKind {
                    ComponentKind::$kind
                }
            }

            impl From<$record> for Component {
                fn from(mut record: $record) -> Self {
                    record.base.component_type = ComponentKind::$kind.as_str().to_string();
                    Component::$kind(record)
                }
            }
        )+
    };
}

macro_rules! parent_component {
    ($($record:ident),+ $(,)?) => {
        $(
            impl ParentComponent for $record {
                fn children(&self) -> &[Component] {
                    &self.components
                }

                fn children_mut(&mut self) -> &mut Vec<Component> {
                    &mut self.components
                }
            }
        )+
    };
}

// ===== Window =====

/// Page window: language, tab title, slug and theme around the page body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreWindow {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub window_type: String,
    pub tab_title: String,
    pub slug: String,
    pub theme: String,
    pub language: Language,
}

/// Language of a window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Language code (e.g. "en")
    pub code: String,
    /// Text direction ("ltr" / "rtl")
    pub direction: String,
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreBody {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
}

// ===== Navbar =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreNavbar {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub attrs: NavbarAttrs,
}

/// Navbar brand attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarAttrs {
    pub brand: String,
    pub brand_link: String,
}

/// Navbar entry; may open a dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreNavbarItem {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub is_minimized: bool,
    pub text: String,
    pub icon: String,
    pub item_type: String,
    pub tooltip: String,
    pub style: String,
    pub url: String,
    pub dropdown: Option<CoreDropdown>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreDropdown {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreDropdownItem {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub text: String,
    pub icon: String,
    pub url: String,
}

// ===== Footer =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFooter {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
}

/// Footer column holding links, texts and pictures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFooterColumn {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub title: String,
    /// Grid layout hint
    pub grid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFooterLink {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFooterText {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreFooterPicture {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub text: String,
    pub url: String,
}

// ===== Content =====

/// Page header: title, motto, logo and hero picture over its own components
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreHeader {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub title: String,
    pub motto: String,
    pub logo_filename: String,
    pub picture_filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreHeading {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub title: String,
    pub text: String,
}

/// Text section with optional link and pictures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreSection {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub title: String,
    pub text: String,
    pub text_align: String,
    pub link: String,
    pub link_text: String,
    pub background_picture_filename: String,
    pub picture_filename: String,
    pub picture_position: String,
}

// ===== Forms =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreForm {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub components: Vec<Component>,
    pub title: String,
    pub text: String,
    /// Target URL for submission
    pub submit_url: String,
    /// HTTP method for submission
    pub method: String,
}

/// Form input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreInput {
    #[serde(flatten)]
    pub base: ComponentBase,
    pub input_type: String,
    pub value: String,
    /// Validation regex applied by the renderer
    pub pattern: String,
    pub placeholder: String,
    pub required: bool,
    pub icon: String,
}

core_component!(
    CoreWindow => Window,
    CoreBody => Body,
    CoreNavbar => Navbar,
    CoreNavbarItem => NavbarItem,
    CoreDropdown => Dropdown,
    CoreDropdownItem => DropdownItem,
    CoreFooter => Footer,
    CoreFooterColumn => FooterColumn,
    CoreFooterLink => FooterLink,
    CoreFooterText => FooterText,
    CoreFooterPicture => FooterPicture,
    CoreHeader => Header,
    CoreHeading => Heading,
    CoreSection => Section,
    CoreForm => Form,
    CoreInput => Input,
);

parent_component!(
    CoreWindow,
    CoreBody,
    CoreNavbar,
    CoreDropdown,
    CoreFooter,
    CoreFooterColumn,
    CoreHeader,
    CoreHeading,
    CoreForm,
);

// ===== Closed component union =====

/// Any component that may appear in a `components` list
///
/// Serializes as the inner record with `component_type` set from the
/// variant. Deserializes by dispatching on `component_type`; unknown or
/// missing tags are rejected. Converting a record with `From` stamps the
/// same tag, so built and decoded values compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Window(CoreWindow),
    Body(CoreBody),
    Navbar(CoreNavbar),
    NavbarItem(CoreNavbarItem),
    Dropdown(CoreDropdown),
    DropdownItem(CoreDropdownItem),
    Footer(CoreFooter),
    FooterColumn(CoreFooterColumn),
    FooterLink(CoreFooterLink),
    FooterText(CoreFooterText),
    FooterPicture(CoreFooterPicture),
    Header(CoreHeader),
    Heading(CoreHeading),
    Section(CoreSection),
    Form(CoreForm),
    Input(CoreInput),
}

macro_rules! each_variant {
    ($value:expr, $record:ident => $body:expr) => {
        match $value {
            Component::Window($record) => $body,
            Component::Body($record) => $body,
            Component::Navbar($record) => $body,
            Component::NavbarItem($record) => $body,
            Component::Dropdown($record) => $body,
            Component::DropdownItem($record) => $body,
            Component::Footer($record) => $body,
            Component::FooterColumn($record) => $body,
            Component::FooterLink($record) => $body,
            Component::FooterText($record) => $body,
            Component::FooterPicture($record) => $body,
            Component::Header($record) => $body,
            Component::Heading($record) => $body,
            Component::Section($record) => $body,
            Component::Form($record) => $body,
            Component::Input($record) => $body,
        }
    };
}

impl CoreComponent for Component {
    fn base(&self) -> &ComponentBase {
        each_variant!(self, record => &record.base)
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        each_variant!(self, record => &mut record.base)
    }

    fn kind(&self) -> ComponentKind {
        each_variant!(self, record => record.kind())
    }
}

impl Component {
    /// Parent view of this component, `None` for leaves
    pub fn as_parent(&self) -> Option<&dyn ParentComponent> {
        match self {
            Self::Window(c) => Some(c),
            Self::Body(c) => Some(c),
            Self::Navbar(c) => Some(c),
            Self::Dropdown(c) => Some(c),
            Self::Footer(c) => Some(c),
            Self::FooterColumn(c) => Some(c),
            Self::Header(c) => Some(c),
            Self::Heading(c) => Some(c),
            Self::Form(c) => Some(c),
            Self::NavbarItem(_)
            | Self::DropdownItem(_)
            | Self::FooterLink(_)
            | Self::FooterText(_)
            | Self::FooterPicture(_)
            | Self::Section(_)
            | Self::Input(_) => None,
        }
    }

    /// Children in stored order; empty for leaves
    pub fn children(&self) -> &[Component] {
        match self.as_parent() {
            Some(parent) => parent.children(),
            None => &[],
        }
    }

    pub fn is_parent(&self) -> bool {
        self.kind().is_parent()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value =
            each_variant!(self, record => serde_json::to_value(record)).map_err(S::Error::custom)?;
        if let Value::Object(fields) = &mut value {
            fields.insert(
                "component_type".to_string(),
                Value::String(self.kind().as_str().to_string()),
            );
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = {
            let tag = value
                .get("component_type")
                .and_then(Value::as_str)
                .ok_or_else(|| D::Error::missing_field("component_type"))?;
            ComponentKind::from_tag(tag)
                .ok_or_else(|| D::Error::unknown_variant(tag, ComponentKind::TAGS))?
        };

        let component = match kind {
            ComponentKind::Window => serde_json::from_value(value).map(Self::Window),
            ComponentKind::Body => serde_json::from_value(value).map(Self::Body),
            ComponentKind::Navbar => serde_json::from_value(value).map(Self::Navbar),
            ComponentKind::NavbarItem => serde_json::from_value(value).map(Self::NavbarItem),
            ComponentKind::Dropdown => serde_json::from_value(value).map(Self::Dropdown),
            ComponentKind::DropdownItem => serde_json::from_value(value).map(Self::DropdownItem),
            ComponentKind::Footer => serde_json::from_value(value).map(Self::Footer),
            ComponentKind::FooterColumn => serde_json::from_value(value).map(Self::FooterColumn),
            ComponentKind::FooterLink => serde_json::from_value(value).map(Self::FooterLink),
            ComponentKind::FooterText => serde_json::from_value(value).map(Self::FooterText),
            ComponentKind::FooterPicture => {
                serde_json::from_value(value).map(Self::FooterPicture)
            }
            ComponentKind::Header => serde_json::from_value(value).map(Self::Header),
            ComponentKind::Heading => serde_json::from_value(value).map(Self::Heading),
            ComponentKind::Section => serde_json::from_value(value).map(Self::Section),
            ComponentKind::Form => serde_json::from_value(value).map(Self::Form),
            ComponentKind::Input => serde_json::from_value(value).map(Self::Input),
        };
        component.map_err(D::Error::custom)
    }
}
