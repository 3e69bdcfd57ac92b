//! Scripted interaction scenarios
//!
//! A [`Scenario`] describes a container and a list of steps: host scrolls,
//! pointer events, waits and content resizes. [`ScenarioRunner`] replays it
//! against a [`ScrollbarController`] on a virtual clock, applying every
//! scroll request back to the simulated container the way a browser would,
//! and collects a [`Report`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thumbtrack_ui::{
    Axis, Callback, DragState, MouseButton, Overlay, Padding, Point, PointerEvent, ScrollPosition,
    ScrollRequest, ScrollbarConfig, ScrollbarController, Size,
};
use web_time::Instant;

use crate::host::{ManualObserver, Paint, RecordingSurface, SimContainer, SimRegistry};

/// Errors that can occur when loading or running a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// JSON parsing error
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] serde_json::Error),

    /// I/O error when reading the scenario file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Container geometry that cannot be laid out
    #[error("Invalid container: {0}")]
    InvalidContainer(String),
}

/// Geometry of the simulated container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    /// Client width and height
    pub client: [f32; 2],
    /// Content width and height
    pub content: [f32; 2],
    /// Padding as top, right, bottom, left
    pub padding: [f32; 4],
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self {
            client: [200.0, 200.0],
            content: [1000.0, 1000.0],
            padding: [0.0; 4],
        }
    }
}

impl ContainerSpec {
    fn validate(&self) -> Result<(), ScenarioError> {
        let [width, height] = self.client;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ScenarioError::InvalidContainer(format!(
                "client size must be positive, got {}x{}",
                width, height
            )));
        }
        if self.content.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ScenarioError::InvalidContainer(format!(
                "content size must be non-negative, got {}x{}",
                self.content[0], self.content[1]
            )));
        }
        Ok(())
    }
}

/// Pointer button named in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<Button> for MouseButton {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => MouseButton::Left,
            Button::Right => MouseButton::Right,
            Button::Middle => MouseButton::Middle,
        }
    }
}

/// One scenario step. Pointer coordinates are in the container's
/// padding-box space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Step {
    /// The host scrolls the container to absolute offsets.
    Scroll { left: f32, top: f32 },
    Press {
        x: f32,
        y: f32,
        #[serde(default)]
        button: Button,
    },
    /// Pointer move. `stop_propagation` makes the content under the pointer
    /// swallow the event at the target.
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        stop_propagation: bool,
    },
    Release {
        x: f32,
        y: f32,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        stop_propagation: bool,
    },
    Enter,
    Leave,
    /// Advance the clock, firing every timer that falls due.
    Wait { ms: u64 },
    /// Replace the content size and notify the observer.
    Resize { width: f32, height: f32 },
}

/// A scripted session against one container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub container: ContainerSpec,
    /// Overrides the player's default scrollbar configuration
    pub scrollbar: Option<ScrollbarConfig>,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Deserialize a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.container.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Built-in session: scroll, drag the vertical thumb, then let the bars
    /// fade out.
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            container: ContainerSpec::default(),
            scrollbar: None,
            steps: vec![
                Step::Enter,
                Step::Scroll {
                    left: 0.0,
                    top: 120.0,
                },
                Step::Wait { ms: 16 },
                Step::Press {
                    x: 192.0,
                    y: 40.0,
                    button: Button::Left,
                },
                Step::Move {
                    x: 192.0,
                    y: 80.0,
                    stop_propagation: false,
                },
                Step::Wait { ms: 16 },
                Step::Move {
                    x: 192.0,
                    y: 120.0,
                    stop_propagation: true,
                },
                Step::Wait { ms: 16 },
                Step::Release {
                    x: 192.0,
                    y: 120.0,
                    button: Button::Left,
                    stop_propagation: false,
                },
                Step::Resize {
                    width: 1000.0,
                    height: 2000.0,
                },
                Step::Wait { ms: 600 },
                Step::Scroll {
                    left: 300.0,
                    top: 400.0,
                },
                Step::Leave,
                Step::Wait { ms: 16 },
            ],
        }
    }
}

/// Outcome of a scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    /// Every thumb write, in order
    pub paints: Vec<Paint>,
    /// Every scroll request the scrollbar issued, in order
    pub scroll_requests: Vec<ScrollRequest>,
    pub final_position: ScrollPosition,
    pub drag_state: DragState,
    /// Virtual time covered by the run
    pub elapsed: Duration,
    /// Overlay at the end of the run
    pub overlay: Overlay,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario '{}' ({} ms)", self.name, self.elapsed.as_millis())?;
        writeln!(f, "  paints: {}", self.paints.len())?;
        writeln!(f, "  scroll requests: {}", self.scroll_requests.len())?;
        writeln!(
            f,
            "  final position: left {}, top {}",
            self.final_position.scroll_left, self.final_position.scroll_top
        )?;
        for (label, node) in [
            ("horizontal", self.overlay.horizontal.as_ref()),
            ("vertical", self.overlay.vertical.as_ref()),
        ] {
            match node {
                Some(node) => writeln!(
                    f,
                    "  {} bar: {}, thumb {:.1} at {:.1}",
                    label,
                    if node.visible { "visible" } else { "hidden" },
                    node.thumb_size,
                    node.thumb_offset
                )?,
                None => writeln!(f, "  {} bar: none", label)?,
            }
        }
        write!(f, "  drag: {:?}", self.drag_state)
    }
}

/// Replays steps against a controller on a virtual clock.
pub struct ScenarioRunner {
    name: String,
    controller: ScrollbarController,
    container: Rc<SimContainer>,
    registry: Rc<SimRegistry>,
    observer: ManualObserver,
    surface: RecordingSurface,
    requests: Rc<RefCell<Vec<ScrollRequest>>>,
    issued: Vec<ScrollRequest>,
    start: Instant,
    now: Instant,
}

impl ScenarioRunner {
    /// Mount a controller on the scenario's container. `defaults` applies
    /// when the scenario brings no scrollbar configuration.
    pub fn new(scenario: &Scenario, defaults: &ScrollbarConfig) -> Result<Self, ScenarioError> {
        scenario.container.validate()?;

        let spec = scenario.container;
        let [top, right, bottom, left] = spec.padding;
        let container = SimContainer::new(
            Size::new(spec.client[0], spec.client[1]),
            Size::new(spec.content[0], spec.content[1]),
            Padding::new(top, right, bottom, left),
        );
        let registry = SimRegistry::new();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        let config = scenario.scrollbar.clone().unwrap_or_else(|| defaults.clone());

        let mut controller = ScrollbarController::new(
            container.clone(),
            registry.clone(),
            Callback::new(move |request: ScrollRequest| sink.borrow_mut().push(request)),
            config,
        );

        let surface = RecordingSurface::new();
        controller.mount_track(Axis::Horizontal, Box::new(surface.clone()));
        controller.mount_track(Axis::Vertical, Box::new(surface.clone()));

        let observer = ManualObserver::new();
        controller.attach_observer(Box::new(observer.clone()));

        let now = Instant::now();
        Ok(Self {
            name: scenario.name.clone(),
            controller,
            container,
            registry,
            observer,
            surface,
            requests,
            issued: Vec::new(),
            start: now,
            now,
        })
    }

    pub fn controller(&self) -> &ScrollbarController {
        &self.controller
    }

    pub fn container(&self) -> &SimContainer {
        &self.container
    }

    pub fn registry(&self) -> &SimRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// Apply one step, then let the controller catch up at the current time.
    pub fn step(&mut self, step: &Step) {
        log::debug!("Step {:?}", step);
        match *step {
            Step::Scroll { left, top } => {
                let position = self.container.scroll_to(left, top);
                self.controller.move_to(position, self.now);
            }
            Step::Press { x, y, button } => self.dispatch(
                PointerEvent::Pressed {
                    button: button.into(),
                    position: Point::new(x, y),
                },
                false,
            ),
            Step::Move {
                x,
                y,
                stop_propagation,
            } => self.dispatch(
                PointerEvent::Moved {
                    position: Point::new(x, y),
                },
                stop_propagation,
            ),
            Step::Release {
                x,
                y,
                button,
                stop_propagation,
            } => self.dispatch(
                PointerEvent::Released {
                    button: button.into(),
                    position: Point::new(x, y),
                },
                stop_propagation,
            ),
            Step::Enter => self.dispatch(PointerEvent::Entered, false),
            Step::Leave => self.dispatch(PointerEvent::Left, false),
            Step::Wait { ms } => self.advance(Duration::from_millis(ms)),
            Step::Resize { width, height } => {
                let position = self.container.resize_content(Size::new(width, height));
                if !self.observer.notify() {
                    log::warn!("Resize with no observer attached");
                }
                self.controller.move_to(position, self.now);
            }
        }
        self.controller.tick(self.now);
    }

    fn dispatch(&mut self, event: PointerEvent, stop_propagation: bool) {
        if self
            .registry
            .route(event.kind(), stop_propagation)
            .is_empty()
        {
            log::trace!("No listener reached by {:?}", event);
            return;
        }
        self.controller.handle_event(&event, self.now);
        self.apply_requests();
    }

    /// Feed scroll requests back as host scrolls.
    fn apply_requests(&mut self) {
        let pending: Vec<ScrollRequest> = self.requests.borrow_mut().drain(..).collect();
        for request in pending {
            let position = self.container.apply(request);
            self.issued.push(request);
            self.controller.move_to(position, self.now);
        }
    }

    /// Move the clock forward by `by`, ticking at every deadline on the way.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while let Some(deadline) = self.controller.next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            self.controller.tick(self.now);
        }
        self.now = target;
        self.controller.tick(self.now);
    }

    pub fn finish(self) -> Report {
        Report {
            name: self.name.clone(),
            paints: self.surface.paints(),
            scroll_requests: self.issued.clone(),
            final_position: self.container.position(),
            drag_state: self.controller.drag_state(),
            elapsed: self.now - self.start,
            overlay: self.controller.overlay(),
        }
    }
}

/// Run every step of `scenario` and report the outcome.
pub fn run(scenario: &Scenario, defaults: &ScrollbarConfig) -> Result<Report, ScenarioError> {
    let mut runner = ScenarioRunner::new(scenario, defaults)?;
    for step in &scenario.steps {
        runner.step(step);
    }
    Ok(runner.finish())
}
