use std::cell::Cell;

/// Debug channels selected through `JSX_IF_FOR_DEBUG`, a comma separated
/// list of channel names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channels {
    /// Log each construct as it is rewritten or disabled.
    pub rewrite: bool,
    /// Dump whole-file source before and after the pass.
    pub file: bool,
    /// Dump the tree as JSON before and after the pass.
    pub tree: bool,
}

impl Channels {
    /// Parse a channel list. Unknown names are ignored.
    pub fn parse(list: &str) -> Channels {
        let mut channels = Channels::default();
        for name in list.split(',') {
            match name.trim() {
                "rewrite" => channels.rewrite = true,
                "file" => channels.file = true,
                "tree" => channels.tree = true,
                _ => {}
            }
        }
        channels
    }
}

thread_local! {
    static CHANNELS_OVERRIDE: Cell<Option<Channels>> = const { Cell::new(None) };
}

/// Channels in effect for the current call: the thread-local override when
/// one is set, otherwise whatever `JSX_IF_FOR_DEBUG` selects.
pub fn channels() -> Channels {
    CHANNELS_OVERRIDE.with(|cell| cell.get()).unwrap_or_else(|| {
        std::env::var("JSX_IF_FOR_DEBUG")
            .map(|list| Channels::parse(&list))
            .unwrap_or_default()
    })
}

/// Force a channel selection for the current thread; `None` returns
/// control to the environment variable.
pub fn override_channels(channels: Option<Channels>) {
    CHANNELS_OVERRIDE.with(|cell| cell.set(channels));
}
