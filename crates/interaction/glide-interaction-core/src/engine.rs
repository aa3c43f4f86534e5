//! Engine: page ownership and public API with input routing + per-tick
//! stepping of followers, pagers, scroll spies, and typewriters.
//!
//! Methods:
//! - new, add_page, update (apply inputs → tick controllers → emit outputs)

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::follower::PointerFollower;
use crate::glitch::GlitchText;
use crate::ids::{IdAllocator, PageId};
use crate::inputs::{Inputs, PageCommand};
use crate::layout::{LayoutMode, Viewport};
use crate::outputs::{keys, Change, Outputs, UiEvent};
use crate::pager::SectionPager;
use crate::scrollspy::ScrollSpy;
use crate::typewriter::Typewriter;
use crate::value::Value;

/// Configuration for adding a page. Every field falls back to the engine
/// [`Config`]; the site variants only ever override `damping` (0.12 vs 0.15).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCfg {
    /// Number of paged sections; 0 means the page has no pager.
    pub sections: u32,
    /// Whether the page renders the custom cursor on desktop.
    pub follower: bool,
    /// Track active section from native scroll instead of paging.
    pub scroll_spy: bool,
    /// Tagline revealed by the typewriter, if any.
    pub typing: Option<String>,
    /// Banner text run through the glitch effect, if any.
    pub glitch: Option<String>,
    pub damping: Option<f32>,
    pub cooldown: Option<f32>,
}

impl Default for PageCfg {
    fn default() -> Self {
        Self {
            sections: 0,
            follower: true,
            scroll_spy: false,
            typing: None,
            glitch: None,
            damping: None,
            cooldown: None,
        }
    }
}

/// One mounted page and its controllers.
#[derive(Debug)]
struct Page {
    id: PageId,
    name: String,
    follower: Option<PointerFollower>,
    pager: Option<SectionPager>,
    spy: Option<ScrollSpy>,
    typer: Option<Typewriter>,
    glitch: Option<GlitchText>,
    hovering_prev: bool,
}

/// Engine (core). Owns all page state; hosts drive it once per display frame.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    pages: Vec<Page>,
    viewport: Viewport,
    mode: LayoutMode,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        let viewport = Viewport::default();
        let mode = LayoutMode::for_width(viewport.width, cfg.mobile_breakpoint);
        Self {
            cfg,
            ids: IdAllocator::new(),
            pages: Vec::new(),
            viewport,
            mode,
            outputs: Outputs::default(),
        }
    }

    /// Register a page with the controllers its layout needs.
    pub fn add_page(&mut self, name: &str, cfg: PageCfg) -> PageId {
        let id = self.ids.alloc_page();
        let follower = cfg
            .follower
            .then(|| PointerFollower::new(cfg.damping.unwrap_or(self.cfg.damping)));
        let pager = (cfg.sections > 0).then(|| {
            SectionPager::new(
                cfg.sections,
                cfg.cooldown.unwrap_or(self.cfg.cooldown),
                self.cfg.ease,
            )
        });
        let spy = cfg.scroll_spy.then(ScrollSpy::new);
        let typer = cfg
            .typing
            .map(|text| Typewriter::new(text, self.cfg.type_interval));
        let glitch = cfg.glitch.map(|text| {
            GlitchText::new(
                text,
                self.cfg.glitch_interval,
                self.cfg.glitch_hold,
                self.cfg.glitch_seed,
            )
        });
        self.pages.push(Page {
            id,
            name: name.to_string(),
            follower,
            pager,
            spy,
            typer,
            glitch,
            hovering_prev: false,
        });
        id
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current section index of a page's pager, if it has one.
    pub fn section_index(&self, page: PageId) -> Option<u32> {
        self.page(page)?.pager.as_ref().map(|p| p.index())
    }

    pub fn is_transitioning(&self, page: PageId) -> Option<bool> {
        self.page(page)?.pager.as_ref().map(|p| p.is_transitioning())
    }

    /// Smoothed cursor center of a page's follower, if it has one.
    pub fn cursor_position(&self, page: PageId) -> Option<[f32; 2]> {
        self.page(page)?.follower.as_ref().map(|f| f.position())
    }

    /// True when the host must `preventDefault` wheel events for this page:
    /// the pager owns navigation on desktop. On mobile the page falls back to
    /// native scrolling and the wheel passes through.
    pub fn wants_wheel_capture(&self, page: PageId) -> bool {
        self.mode == LayoutMode::Desktop
            && self
                .page(page)
                .map(|p| p.pager.is_some())
                .unwrap_or(false)
    }

    fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    fn push_event(outputs: &mut Outputs, cap: usize, event: UiEvent) {
        if outputs.events.len() < cap {
            outputs.push_event(event);
        } else {
            log::debug!("engine: event dropped, per-tick cap {cap} reached");
        }
    }

    /// Apply one frame's worth of commands. Pointer and navigation input is
    /// dropped on mobile: those controllers are a desktop-only enhancement
    /// over a natively scrolling fallback. Scroll/bounds input stays live in
    /// both modes.
    fn apply_inputs(&mut self, inputs: Inputs) {
        if let Some(vp) = inputs.resize {
            self.viewport = vp;
            let mode = LayoutMode::for_width(vp.width, self.cfg.mobile_breakpoint);
            if mode != self.mode {
                self.mode = mode;
                Self::push_event(
                    &mut self.outputs,
                    self.cfg.max_events_per_tick,
                    UiEvent::LayoutChanged { mode },
                );
            }
        }

        let desktop = self.mode == LayoutMode::Desktop;
        let cap = self.cfg.max_events_per_tick;
        for cmd in inputs.page_cmds {
            let Some(page) = self.pages.iter_mut().find(|p| p.id == cmd.page()) else {
                log::debug!("engine: command for unknown page {:?}", cmd.page());
                continue;
            };
            match cmd {
                PageCommand::PointerMove { x, y, .. } => {
                    if desktop {
                        if let Some(f) = page.follower.as_mut() {
                            f.set_target(x, y);
                        }
                    }
                }
                PageCommand::HoverEnter { .. } => {
                    if desktop {
                        if let Some(f) = page.follower.as_mut() {
                            f.hover_enter();
                        }
                    }
                }
                PageCommand::HoverLeave { .. } => {
                    if desktop {
                        if let Some(f) = page.follower.as_mut() {
                            f.hover_leave();
                        }
                    }
                }
                PageCommand::Wheel { delta, .. } => {
                    if desktop {
                        if let Some(p) = page.pager.as_mut() {
                            if let Some(step) = p.on_wheel(delta) {
                                Self::push_event(
                                    &mut self.outputs,
                                    cap,
                                    UiEvent::SectionChanged {
                                        page: page.id,
                                        from: step.from,
                                        to: step.to,
                                    },
                                );
                            }
                        }
                    } else {
                        log::debug!("engine: wheel ignored on mobile layout");
                    }
                }
                PageCommand::Jump { index, .. } => {
                    if desktop {
                        if let Some(p) = page.pager.as_mut() {
                            if let Some(step) = p.jump_to(index) {
                                Self::push_event(
                                    &mut self.outputs,
                                    cap,
                                    UiEvent::SectionChanged {
                                        page: page.id,
                                        from: step.from,
                                        to: step.to,
                                    },
                                );
                            }
                        }
                    } else {
                        log::debug!("engine: jump ignored on mobile layout");
                    }
                }
                PageCommand::Scroll {
                    scroll_y,
                    doc_height,
                    ..
                } => {
                    if let Some(spy) = page.spy.as_mut() {
                        let from = spy.active();
                        if let Some(to) = spy.on_scroll(scroll_y, self.viewport.height, doc_height)
                        {
                            Self::push_event(
                                &mut self.outputs,
                                cap,
                                UiEvent::SectionChanged {
                                    page: page.id,
                                    from,
                                    to,
                                },
                            );
                        }
                    }
                }
                PageCommand::SetSectionBounds { bounds, .. } => {
                    if let Some(spy) = page.spy.as_mut() {
                        spy.set_bounds(bounds);
                    }
                }
            }
        }
    }

    /// Step the simulation by dt with given inputs, producing outputs.
    /// Apply inputs, tick every controller, then emit per-page changes.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Apply resize and page commands
        self.apply_inputs(inputs);

        // 2) Tick controllers. Pager cooldowns keep counting on mobile so the
        //    transitioning flag clears unconditionally even if the layout
        //    flipped mid-flight.
        let desktop = self.mode == LayoutMode::Desktop;
        let cap = self.cfg.max_events_per_tick;
        for page in &mut self.pages {
            if let Some(f) = page.follower.as_mut() {
                if desktop {
                    f.tick(dt);
                }
            }
            if let Some(p) = page.pager.as_mut() {
                if let Some(index) = p.tick(dt) {
                    Self::push_event(
                        &mut self.outputs,
                        cap,
                        UiEvent::TransitionFinished { page: page.id, index },
                    );
                }
            }
            if let Some(t) = page.typer.as_mut() {
                t.tick(dt);
            }
            if let Some(g) = page.glitch.as_mut() {
                g.tick(dt);
            }
        }

        // 3) Emit per-page changes. Cursor and section keys are desktop-only;
        //    mobile shows the native pointer and document flow instead.
        for page in &mut self.pages {
            if desktop {
                if let Some(f) = page.follower.as_ref() {
                    self.outputs.push_change(Change {
                        page: page.id,
                        key: keys::CURSOR_POSITION.into(),
                        value: Value::Vec2(f.render_position(&self.cfg.cursor)),
                    });
                    self.outputs.push_change(Change {
                        page: page.id,
                        key: keys::CURSOR_SIZE.into(),
                        value: Value::Float(f.indicator_size(&self.cfg.cursor)),
                    });
                    let hovering = f.hovering();
                    if hovering != page.hovering_prev {
                        page.hovering_prev = hovering;
                        Self::push_event(
                            &mut self.outputs,
                            cap,
                            UiEvent::HoverChanged {
                                page: page.id,
                                hovering,
                            },
                        );
                    }
                }
                if let Some(p) = page.pager.as_ref() {
                    self.outputs.push_change(Change {
                        page: page.id,
                        key: keys::SECTION_INDEX.into(),
                        value: Value::Index(p.index()),
                    });
                    self.outputs.push_change(Change {
                        page: page.id,
                        key: keys::SECTION_PROGRESS.into(),
                        value: Value::Float(p.progress()),
                    });
                }
            }
            if let Some(spy) = page.spy.as_ref() {
                self.outputs.push_change(Change {
                    page: page.id,
                    key: keys::SCROLL_ACTIVE.into(),
                    value: Value::Index(spy.active()),
                });
            }
            if let Some(t) = page.typer.as_ref() {
                self.outputs.push_change(Change {
                    page: page.id,
                    key: keys::TYPE_TEXT.into(),
                    value: Value::Text(t.visible().to_string()),
                });
            }
            if let Some(g) = page.glitch.as_ref() {
                self.outputs.push_change(Change {
                    page: page.id,
                    key: keys::GLITCH_TEXT.into(),
                    value: Value::Text(g.visible()),
                });
            }
        }

        &self.outputs
    }
}

impl Engine {
    /// Display name a page was registered with (useful for tests and tooling).
    pub fn page_name(&self, page: PageId) -> Option<&str> {
        self.page(page).map(|p| p.name.as_str())
    }
}
