#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum EventType {
    WindowResize = 0,
    WindowClose,

    KeyPressed,
    KeyReleased,

    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
}

pub const EVENTS_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventMouseMoved {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindowResize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindowClose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: i32,
    pub scancode: i32,
    pub action: i32,
    pub mods: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKeyPressed(pub KeyEvent);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKeyReleased(pub KeyEvent);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonEvent {
    pub button: i32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventMouseButtonPressed(pub MouseButtonEvent);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventMouseButtonReleased(pub MouseButtonEvent);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    WindowResize(EventWindowResize),
    WindowClose(EventWindowClose),
    KeyPressed(EventKeyPressed),
    KeyReleased(EventKeyReleased),
    MouseButtonPressed(EventMouseButtonPressed),
    MouseButtonReleased(EventMouseButtonReleased),
    MouseMoved(EventMouseMoved),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::WindowResize(_) => EventType::WindowResize,
            Event::WindowClose(_) => EventType::WindowClose,
            Event::KeyPressed(_) => EventType::KeyPressed,
            Event::KeyReleased(_) => EventType::KeyReleased,
            Event::MouseButtonPressed(_) => EventType::MouseButtonPressed,
            Event::MouseButtonReleased(_) => EventType::MouseButtonReleased,
            Event::MouseMoved(_) => EventType::MouseMoved,
        }
    }
}

/// A concrete event payload that knows its slot in the dispatcher.
pub trait TypedEvent: 'static {
    const TYPE: EventType;

    fn from_event(event: &Event) -> Option<&Self>;
}

macro_rules! typed_event {
    ($payload:ident => $variant:ident) => {
        impl TypedEvent for $payload {
            const TYPE: EventType = EventType::$variant;

            fn from_event(event: &Event) -> Option<&Self> {
                match event {
                    Event::$variant(e) => Some(e),
                    _ => None,
                }
            }
        }

        impl From<$payload> for Event {
            fn from(e: $payload) -> Self {
                Event::$variant(e)
            }
        }
    };
}

typed_event!(EventWindowResize => WindowResize);
typed_event!(EventWindowClose => WindowClose);
typed_event!(EventKeyPressed => KeyPressed);
typed_event!(EventKeyReleased => KeyReleased);
typed_event!(EventMouseButtonPressed => MouseButtonPressed);
typed_event!(EventMouseButtonReleased => MouseButtonReleased);
typed_event!(EventMouseMoved => MouseMoved);

type EventCallback = Box<dyn FnMut(&Event)>;

/// One callback slot per event type; registering again replaces the old callback.
#[derive(Default)]
pub struct EventDispatcher {
    callbacks: [Option<EventCallback>; EVENTS_COUNT],
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event_listener<E, F>(&mut self, mut callback: F)
    where
        E: TypedEvent,
        F: FnMut(&E) + 'static,
    {
        let base_callback = move |event: &Event| {
            if let Some(e) = E::from_event(event) {
                callback(e);
            }
        };
        self.callbacks[E::TYPE as usize] = Some(Box::new(base_callback));
    }

    pub fn has_listener(&self, event_type: EventType) -> bool {
        self.callbacks[event_type as usize].is_some()
    }

    pub fn dispatch(&mut self, event: &Event) {
        if let Some(callback) = self.callbacks[event.event_type() as usize].as_mut() {
            callback(event);
        }
    }
}
