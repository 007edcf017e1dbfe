use dioxus::prelude::*;

/// Class list shared by every button, whatever its kind.
const BASE_CLASS: &str = "input input-button";

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonKind {
    #[default]
    Default,
    Dashed,
}

impl ButtonKind {
    /// Modifier class appended to [`BASE_CLASS`], empty for the default kind.
    fn modifier(&self) -> &'static str {
        match self {
            ButtonKind::Default => "",
            ButtonKind::Dashed => "dashed",
        }
    }

    /// Full class list for the rendered element.
    pub fn class(&self) -> String {
        let modifier = self.modifier();
        if modifier.is_empty() {
            BASE_CLASS.to_string()
        } else {
            format!("{BASE_CLASS} {modifier}")
        }
    }
}

/// A styled push button rendered as `input[type=button]`.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Text label displayed on the button.
    pub value: String,
    #[props(default)]
    pub kind: ButtonKind,
    /// Called with no payload when the button is activated.
    #[props(default)]
    pub on_click: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![Attribute::new("class", props.kind.class(), None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "button",
            value: props.value,
            onclick: move |_| {
                if let Some(handler) = &props.on_click {
                    handler.call(());
                }
            },
            ..merged,
        }
    }
}
