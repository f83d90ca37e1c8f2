use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_X: i32 = 300;
pub const DEFAULT_WINDOW_Y: i32 = 300;
pub const DEFAULT_WINDOW_WIDTH: i32 = 450;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;
pub const DEFAULT_CONTAINER_WIDTH: i32 = 1024;
pub const DEFAULT_CONTAINER_HEIGHT: i32 = 730;

/// Fixed dock item that opens the trash window; never part of `nav_apps`.
pub const TRASH_APP_ID: &str = "trash";

/// Seed contents of the app navigator, as `(id, name)` pairs.
pub const DEFAULT_NAV_APPS: [(&str, &str); 3] = [
    ("app-store", "App Store"),
    ("store", "Store"),
    ("settings", "Settings"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesktopApp {
    pub id: String,
    pub name: String,
}

impl DesktopApp {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub fn default_nav_apps() -> Vec<DesktopApp> {
    DEFAULT_NAV_APPS
        .iter()
        .map(|(id, name)| DesktopApp::new(*id, *name))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Position and size of a window in window-manager coordinates.
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            position: Point::new(DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y),
            size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A managed window. At most one exists per `app_id`.
pub struct DesktopWindow {
    pub app_id: String,
    pub position: Point,
    pub size: Size,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    /// Geometry saved when the window was maximized.
    pub restore_geometry: Option<WindowGeometry>,
    /// Dock icon center the window collapses toward while minimized.
    #[serde(skip)]
    pub minimize_target: Option<Point>,
}

impl DesktopWindow {
    pub fn new(app_id: impl Into<String>, z_index: u32) -> Self {
        let geometry = WindowGeometry::default();
        Self {
            app_id: app_id.into(),
            position: geometry.position,
            size: geometry.size,
            z_index,
            minimized: false,
            maximized: false,
            restore_geometry: None,
            minimize_target: None,
        }
    }

    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            position: self.position,
            size: self.size,
        }
    }

    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.position = geometry.position;
        self.size = geometry.size;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Screen edge the app navigator is docked to.
pub enum Orientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Self; 4] = [Self::Bottom, Self::Top, Self::Left, Self::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == token.trim())
    }

    /// Whether dock slots are laid out along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Size of the window-manager surface.
pub struct ContainerSize {
    pub width: i32,
    pub height: i32,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CONTAINER_WIDTH,
            height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackgroundImageState {
    pub url: Option<String>,
    pub loading: bool,
    /// Translation key (or raw text) of the last user-visible failure.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub nav_apps: Vec<DesktopApp>,
    pub trashed_apps: Vec<DesktopApp>,
    pub windows: Vec<DesktopWindow>,
    pub active_window_id: Option<String>,
    pub orientation: Orientation,
    pub theme: Theme,
    pub locale: Locale,
    pub container: ContainerSize,
    pub background: BackgroundImageState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            nav_apps: default_nav_apps(),
            trashed_apps: Vec::new(),
            windows: Vec::new(),
            active_window_id: None,
            orientation: Orientation::default(),
            theme: Theme::default(),
            locale: Locale::default(),
            container: ContainerSize::default(),
            background: BackgroundImageState::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, app_id: &str) -> Option<&DesktopWindow> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: &str) -> Option<&mut DesktopWindow> {
        self.windows.iter_mut().find(|w| w.app_id == app_id)
    }

    /// Highest z-index among open windows, `0` when none are open.
    pub fn top_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    pub fn is_trashed(&self, app_id: &str) -> bool {
        self.trashed_apps.iter().any(|app| app.id == app_id)
    }

    /// Display name for `app_id` across navigator and trash, if known.
    pub fn app_name(&self, app_id: &str) -> Option<&str> {
        self.nav_apps
            .iter()
            .chain(self.trashed_apps.iter())
            .find(|app| app.id == app_id)
            .map(|app| app.name.as_str())
    }
}
