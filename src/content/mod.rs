//! Topic content model.
//!
//! Topics are authored as JSON documents (camelCase keys) and grouped into
//! chapters and sections. Each section declares the [`VisualizationState`]
//! the 3D view should adopt and, optionally, the interactive controls whose
//! values feed the device state resolver.

mod store;

use serde::{Deserialize, Serialize};
pub use store::TopicStore;

use crate::device::{ParamValue, ParameterMap};

/// Curriculum area a topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Individual semiconductor devices.
    Devices,
    /// Integrated circuits.
    Ics,
    /// Fabrication processes.
    Processes,
}

/// Reader level of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// No prior background assumed.
    Beginner,
    /// Assumes the beginner material.
    Intermediate,
    /// Assumes device physics background.
    Advanced,
}

/// A complete topic: metadata plus its chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable identifier used for lookup (e.g. `nmos-transistor`).
    pub id: String,
    /// Curriculum area.
    pub category: Category,
    /// Display title.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Reader level.
    pub difficulty: Difficulty,
    /// Ordered chapters.
    pub chapters: Vec<Chapter>,
    /// Renderer selection for the topic's 3D view.
    pub visualization: VisualizationConfig,
}

impl Topic {
    /// Every section in reading order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.chapters.iter().flat_map(|c| c.sections.iter())
    }

    /// The section a reader lands on when opening the topic.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section> {
        self.sections().next()
    }

    /// Find a section by id across all chapters.
    #[must_use]
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections().find(|s| s.id == id)
    }
}

/// A titled group of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Identifier unique within the topic.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Ordered sections.
    pub sections: Vec<Section>,
}

/// One page of explanatory content with its visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Identifier unique within the topic.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// What the 3D view should show for this section.
    pub visualization_state: VisualizationState,
    /// Controls shown alongside the view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_elements: Option<Vec<InteractiveElement>>,
}

impl Section {
    /// Initial parameter map, one entry per control at its default value.
    #[must_use]
    pub fn default_parameters(&self) -> ParameterMap {
        self.interactive_elements
            .iter()
            .flatten()
            .map(|el| (el.id.clone(), el.default_value.clone()))
            .collect()
    }
}

/// Renderer selection for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationConfig {
    /// Renderer name (e.g. `transistor`).
    pub renderer: String,
    /// Named initial view.
    pub default_view: String,
}

/// What kind of scene a section describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum VisualizationKind {
    /// A fabrication step.
    ProcessStep,
    /// The device under bias.
    #[default]
    DeviceOperation,
    /// A static cut through the device.
    CrossSection,
    /// Interactive parameter exploration.
    ParameterSweep,
}

/// Camera placement requested by a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at point.
    pub target: [f32; 3],
}

/// Declared visualization for a section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualizationState {
    /// Scene kind.
    #[serde(rename = "type")]
    pub kind: VisualizationKind,
    /// Optional camera placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraPosition>,
    /// Static layers to show; every other static layer is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<String>>,
    /// Legacy named animation (`off-state`, `on-state`, `rotate-idle`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    /// Layers to pulse briefly when the state is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

/// Kind of interactive control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Continuous numeric value within a range.
    Slider,
    /// Boolean switch.
    Toggle,
    /// Momentary action.
    Button,
}

/// A control whose value is delivered to the resolver under [`Self::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveElement {
    /// Control kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Parameter key (e.g. `Vg`).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Slider bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Initial value.
    pub default_value: ParamValue,
    /// Display unit (e.g. `V`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl InteractiveElement {
    /// Slider increment: a hundredth of the range.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.range.map(|[lo, hi]| (hi - lo) / 100.0)
    }
}
