use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tricolore()
    }
}

impl Theme {
    pub fn tricolore() -> Self {
        Theme { dark: Palette::tricolore_night(), light: Palette::tricolore_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn category(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content.to_uppercase()).small().strong().color(self.palette(ctx).blue)
    }

    pub fn phrase(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(19.0).color(self.palette(ctx).foreground)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted)
    }

    pub fn danger(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).red)
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).surface_raised
    }

    pub fn ticker_fill(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).blue_deep
    }

    pub fn ticker_text(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cream
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    surface_raised: Color32,
    outline: Color32,
    foreground: Color32,
    muted: Color32,
    blue: Color32,
    blue_deep: Color32,
    red: Color32,
    cream: Color32,
}

impl Palette {
    fn tricolore_night() -> Self {
        Self {
            background: Color32::from_rgb(18, 22, 36),
            surface: Color32::from_rgb(24, 30, 48),
            surface_raised: Color32::from_rgb(34, 42, 66),
            outline: Color32::from_rgb(52, 62, 92),
            foreground: Color32::from_rgb(236, 236, 244),
            muted: Color32::from_rgb(140, 150, 178),
            blue: Color32::from_rgb(110, 152, 255),
            blue_deep: Color32::from_rgb(0, 35, 149),
            red: Color32::from_rgb(239, 65, 53),
            cream: Color32::from_rgb(250, 246, 236),
        }
    }

    fn tricolore_day() -> Self {
        Self {
            background: Color32::from_rgb(250, 248, 242),
            surface: Color32::from_rgb(243, 240, 232),
            surface_raised: Color32::from_rgb(255, 255, 255),
            outline: Color32::from_rgb(214, 210, 198),
            foreground: Color32::from_rgb(28, 30, 40),
            muted: Color32::from_rgb(110, 114, 128),
            blue: Color32::from_rgb(0, 62, 170),
            blue_deep: Color32::from_rgb(0, 35, 149),
            red: Color32::from_rgb(200, 40, 40),
            cream: Color32::from_rgb(250, 246, 236),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, fill: Color32, outline: Color32| WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: outline, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    palette.surface,
                    palette.outline,
                ),
                inactive: widget(default.widgets.inactive, palette.surface_raised, palette.outline),
                hovered: widget(default.widgets.hovered, palette.surface_raised, palette.blue),
                active: widget(default.widgets.active, palette.surface_raised, palette.red),
                open: widget(default.widgets.open, palette.surface, palette.blue),
            },
            selection: Selection {
                bg_fill: palette.blue.linear_multiply(0.4),
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.blue,
            extreme_bg_color: palette.surface,
            error_fg_color: palette.red,
            window_fill: palette.background,
            window_shadow: Shadow { color: palette.outline, ..default.window_shadow },
            window_stroke: Stroke { color: palette.outline, ..default.window_stroke },
            panel_fill: palette.background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
    });
}
