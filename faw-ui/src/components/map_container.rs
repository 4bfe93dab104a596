//! Choropleth map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (D3 will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
}

/// Container div for the D3.js choropleth, plus the hover tooltip
/// element the map scripts position against the page.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
        div {
            id: "map-tooltip",
            class: "map-tooltip",
            style: "display: none; position: absolute; pointer-events: none; background: #fff; border: 1px solid #ccc; border-radius: 4px; padding: 4px 8px; font-size: 0.9rem;",
        }
    }
}
