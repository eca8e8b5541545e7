use derive_more::Display;

///
/// Level
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Ord, PartialOrd)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Dictionary,
    Guid,
    Queue,
    Rand,
    Stack,
    Tuple,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let topic_opt: Option<&str> = $topic;
        let message = format!($fmt $(, $arg)*);

        $crate::log::__emit(topic_opt, $level, &message);
    }};
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(topic: Option<&str>, level: Level, message: &str) {
    let line = __format_line(topic, message);

    // tracing levels must be known at the call site
    match level {
        Level::Debug => tracing::debug!(target: "hink", "{line}"),
        Level::Info | Level::Ok => tracing::info!(target: "hink", "{line}"),
        Level::Warn => tracing::warn!(target: "hink", "{line}"),
        Level::Error => tracing::error!(target: "hink", "{line}"),
    }
}

#[doc(hidden)]
#[must_use]
pub fn __format_line(topic: Option<&str>, message: &str) -> String {
    match topic {
        Some(t) => format!("[{t}] {message}"),
        None => message.to_string(),
    }
}

///
/// TESTS
///
