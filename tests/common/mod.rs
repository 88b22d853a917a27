//! Utility helpers shared across integration tests.

/// Build a `Vec<String>` from a list of string slices.
///
/// Used for the blocks handed to the harvester.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Build an expected [`autolinker::TextRun`].
///
/// `run!(br)` is a line break, `run!(b "x")` is bold, `run!("x")` is plain
/// text and `run!("x" => "href")` is a link. Issue links take the title and
/// css too: `run!("x" => "href", title: "", css: "")`.
macro_rules! run {
    (br) => {
        autolinker::TextRun::line_break()
    };
    (b $content:expr) => {
        autolinker::TextRun::bold($content)
    };
    ($content:expr => $href:expr, title: $title:expr, css: $css:expr) => {
        autolinker::TextRun::link($content, $href)
            .with_title($title)
            .with_css($css)
    };
    ($content:expr => $href:expr) => {
        autolinker::TextRun::link($content, $href)
    };
    ($content:expr) => {
        autolinker::TextRun::text($content)
    };
}

/// Drive a future to completion on a current-thread runtime.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}
