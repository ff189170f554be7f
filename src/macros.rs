// src/macros.rs

/// `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = $crate::s!($first);
        $( out.push_str($rest); )+
        out
    }};
}
