use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(unused)]
pub enum SvgSize {
    Full,
    Custom(&'static str),
    Size5,
    #[default]
    Size6,
    Size8,
    Size16,
}
impl SvgSize {
    fn class(self) -> &'static str {
        match self {
            Self::Full => "size-full",
            Self::Custom(s) => s,
            Self::Size5 => "size-5",
            Self::Size6 => "size-6",
            Self::Size8 => "size-8",
            Self::Size16 => "size-16",
        }
    }
}

/// Stroke-drawn icons, in the style of heroicons outline
pub trait DrawableSvg: 'static {
    fn path() -> &'static str;

    fn view_box() -> &'static str {
        "0 0 24 24"
    }
}

macro_rules! drawable_svg {
    ($name:ident, $path:literal) => {
        pub struct $name;
        impl DrawableSvg for $name {
            fn path() -> &'static str {
                $path
            }
        }
    };
}
drawable_svg!(ArrowLeft, "M10 19l-7-7m0 0l7-7m-7 7h18");
drawable_svg!(ArrowRight, "M14 5l7 7m0 0l-7 7m7-7H3");
drawable_svg!(
    Warning,
    "M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126zM12 15.75h.007v.008H12v-.008z"
);
drawable_svg!(
    ExternalLink,
    "M13.5 6H5.25A2.25 2.25 0 003 8.25v10.5A2.25 2.25 0 005.25 21h10.5A2.25 2.25 0 0018 18.75V10.5m-10.5 6L21 3m0 0h-5.25M21 3v5.25"
);
drawable_svg!(
    Refresh,
    "M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0l3.181 3.183a8.25 8.25 0 0013.803-3.7M4.031 9.865a8.25 8.25 0 0113.803-3.7l3.181 3.182m0-4.991v4.99"
);

#[doc = "Properties for the [`DrawSvg`] component."]
#[allow(missing_docs)]
#[derive(Props, Clone, PartialEq)]
pub struct DrawSvgProps {
    pub base_class: Option<&'static str>,
    pub size: Option<SvgSize>,
}

/// # Props
/// *For details, see the [props struct definition](DrawSvgProps).*
/// - [`size`](DrawSvgProps::size) : `Option<SvgSize>`
#[allow(non_snake_case)]
pub fn DrawSvg<S: DrawableSvg>(DrawSvgProps { base_class, size }: DrawSvgProps) -> Element {
    let base_class = base_class.unwrap_or("icon");
    let size_class = size.unwrap_or_default().class();
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: S::view_box(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            class: "{base_class} {size_class}",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: S::path(),
            }
        }
    }
}
