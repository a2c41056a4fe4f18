//! Colours and inline styles for the selector. Purely cosmetic: nothing here
//! affects what gets selected or switched.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub mod blue {
    pub const B100: &str = "#DAECFF";
    pub const B200: &str = "#99CCF3";
    pub const B400: &str = "#3399FF";
    pub const B500: &str = "#007FFF";
    pub const B600: &str = "#0072E5";
    pub const B900: &str = "#003A75";
}

pub mod grey {
    pub const G50: &str = "#f6f8fa";
    pub const G100: &str = "#eaeef2";
    pub const G200: &str = "#d0d7de";
    pub const G300: &str = "#afb8c1";
    pub const G400: &str = "#8c959f";
    pub const G500: &str = "#6e7781";
    pub const G600: &str = "#57606a";
    pub const G700: &str = "#424a53";
    pub const G800: &str = "#32383f";
    pub const G900: &str = "#24292f";
}

const FONT: &str = "font-family: IBM Plex Sans, sans-serif;";

impl Theme {
    fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    pub fn background(self) -> &'static str {
        self.pick(grey::G900, "#fff")
    }

    pub fn border(self) -> &'static str {
        self.pick(grey::G700, grey::G200)
    }

    pub fn text(self) -> &'static str {
        self.pick(grey::G300, grey::G900)
    }

    pub fn label_style(self) -> String {
        format!(
            "{FONT} font-size: 0.85rem; display: block; margin-bottom: 4px; \
             font-weight: 400; color: {};",
            self.pick(grey::G400, grey::G700)
        )
    }

    pub fn button_style(self, open: bool) -> String {
        let mut style = format!(
            "{FONT} font-size: 0.875rem; box-sizing: border-box; min-width: 320px; \
             padding: 8px 12px; border-radius: 8px; text-align: left; line-height: 1.5; \
             background: {}; border: 1px solid {}; color: {}; position: relative; \
             box-shadow: 0px 2px 24px {};",
            self.background(),
            self.border(),
            self.text(),
            self.pick(blue::B900, blue::B100),
        );
        if open {
            style.push_str(&format!(
                " border-color: {}; outline: 3px solid {};",
                blue::B400,
                self.pick(blue::B500, blue::B200)
            ));
        }
        style
    }

    pub fn listbox_style(self) -> String {
        format!(
            "{FONT} font-size: 0.875rem; box-sizing: border-box; padding: 6px; \
             margin: 12px 0; min-width: 320px; border-radius: 12px; overflow: auto; \
             outline: 0px; background: {}; border: 1px solid {}; color: {}; \
             box-shadow: 0px 2px 6px {}; z-index: 1; position: absolute;",
            self.background(),
            self.border(),
            self.text(),
            self.pick("rgba(0,0,0, 0.50)", "rgba(0,0,0, 0.05)"),
        )
    }

    /// Selected wins over highlighted.
    pub fn option_style(self, selected: bool, highlighted: bool) -> String {
        let base = "list-style: none; padding: 8px; border-radius: 8px; cursor: default;";
        let colours = if selected {
            Some((self.pick(blue::B900, blue::B100), self.pick(blue::B100, blue::B900)))
        } else if highlighted {
            Some((self.pick(grey::G800, grey::G100), self.pick(grey::G300, grey::G900)))
        } else {
            None
        };
        match colours {
            Some((background, colour)) => {
                format!("{base} background-color: {background}; color: {colour};")
            }
            None => base.to_owned(),
        }
    }
}
