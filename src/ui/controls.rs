//! Floating panels attached to the map: the park info panel and the legend.

use crate::{
    constants::{INFO_CONTROL_ID, LEGEND_CONTROL_ID},
    data::park::ParkFeature,
    layers::style::{legend_entries, Color},
};

/// Corner of the map a control is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One line of a control, optionally led by a color swatch
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLine {
    pub swatch: Option<Color>,
    pub text: String,
}

impl ControlLine {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            swatch: None,
            text: text.into(),
        }
    }

    pub fn swatch(color: Color, text: impl Into<String>) -> Self {
        Self {
            swatch: Some(color),
            text: text.into(),
        }
    }
}

/// What a control currently displays
#[derive(Debug, Clone, PartialEq)]
pub struct ControlContent {
    pub title: String,
    pub lines: Vec<ControlLine>,
}

impl ControlContent {
    /// Lines joined for plain-text display
    pub fn to_text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.lines.iter().map(|line| line.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: String,
    pub position: ControlPosition,
    pub content: ControlContent,
}

impl Control {
    pub fn new(id: impl Into<String>, position: ControlPosition, content: ControlContent) -> Self {
        Self {
            id: id.into(),
            position,
            content,
        }
    }
}

pub const INFO_TITLE: &str = "Park Information";
pub const INFO_PLACEHOLDER: &str = "Hover over a park";
pub const LEGEND_TITLE: &str = "Area (ha)";

/// Content builders for the top-right info panel
pub struct InfoPanel;

impl InfoPanel {
    pub fn control() -> Control {
        Control::new(
            INFO_CONTROL_ID,
            ControlPosition::TopRight,
            Self::placeholder(),
        )
    }

    /// Shown while no park is hovered
    pub fn placeholder() -> ControlContent {
        ControlContent {
            title: INFO_TITLE.to_string(),
            lines: vec![ControlLine::text(INFO_PLACEHOLDER)],
        }
    }

    /// Attributes of one park; absent values render empty
    pub fn for_park(park: &ParkFeature) -> ControlContent {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        ControlContent {
            title: INFO_TITLE.to_string(),
            lines: vec![
                ControlLine::text(park.name.clone()),
                ControlLine::text(format!("Location: {}", text(&park.location_description))),
                ControlLine::text(format!("Neighbourhood: {}", text(&park.neighbourhood))),
                ControlLine::text(format!("Electoral Ward: {}", text(&park.electoral_ward))),
                ControlLine::text(format!("District: {}", text(&park.district))),
                ControlLine::text(format!("Area (ha): {}", text(&park.area_text))),
                ControlLine::text(format!(
                    "Land Area (ha): {}",
                    text(&park.land_area_text)
                )),
                ControlLine::text(format!(
                    "Water Area (ha): {}",
                    text(&park.water_area_text)
                )),
            ],
        }
    }
}

/// Bottom-left legend of the area color scale
pub struct Legend;

impl Legend {
    pub fn control() -> Control {
        Control::new(
            LEGEND_CONTROL_ID,
            ControlPosition::BottomLeft,
            Self::content(),
        )
    }

    pub fn content() -> ControlContent {
        ControlContent {
            title: LEGEND_TITLE.to_string(),
            lines: legend_entries()
                .into_iter()
                .map(|entry| ControlLine::swatch(entry.color, entry.label))
                .collect(),
        }
    }
}
