//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

error_chain! {

    errors {

        InvalidDepth(depth: i64) {
            description("invalid subdivision depth")
            display("invalid subdivision depth {:} (expected 0 to {:})",
                    depth, crate::tiling::MAX_DEPTH)
        }

        MalformedKind(code: i64) {
            description("malformed triangle kind")
            display("malformed triangle kind code {:} (expected 0 or 1)", code)
        }

        Parse(line: usize, msg: String) {
            description("malformed listing")
            display("line {:}: {:}", line, msg)
        }

        UnknownName(what: &'static str, name: String, expected: String) {
            description("unknown name")
            display("unexpected {:} \"{:}\", expected one of: {:}",
                    what, name, expected)
        }

    }

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
        ParseFloat(::std::num::ParseFloatError);
        ParseInt(::std::num::ParseIntError);
        Cairo(::cairo::Error) #[cfg(feature = "render")];
        CairoIo(::cairo::IoError) #[cfg(feature = "render")];
    }

}
