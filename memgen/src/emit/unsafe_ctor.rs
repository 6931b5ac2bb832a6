//! Emitter for the `tpie_unsafe_new` overloads.
//!
//! The emitted body relies on the guard's destructor to release storage when
//! the constructor throws: `finalize()` is reached only after construction
//! succeeds, and it disarms the guard and hands ownership to the caller.

#![expect(
    clippy::format_push_string,
    reason = "block templating uses format! for clarity"
)]

use super::{GUARD_TYPE, RenderOptions, SUPPRESSED_WARNING, UNSAFE_NEW, comma_list};
use crate::signature::UnsafeSignature;

/// Renders one `tpie_unsafe_new` definition, ending in `}\n`.
///
/// # Examples
///
/// ```
/// use tpie_memgen::emit::{RenderOptions, unsafe_ctor};
/// use tpie_memgen::signature::UnsafeSignature;
///
/// let options = RenderOptions { warning_pragmas: false };
/// let text = unsafe_ctor::render(UnsafeSignature::new(1), &options);
/// assert!(text.starts_with("template <typename T, typename T0>\nT * tpie_unsafe_new(T0 t0) {\n"));
/// assert!(text.contains("   new(m.allocate()) T(t0); \n"));
/// ```
#[must_use]
pub fn render(signature: UnsafeSignature, options: &RenderOptions) -> String {
    let mut block = String::with_capacity(320);
    block.push_str(&format!(
        "template <{}>\n",
        comma_list(&signature.template_params())
    ));
    block.push_str(&format!(
        "T * {UNSAFE_NEW}({}) {{\n",
        comma_list(&signature.value_params())
    ));
    // Trailing spaces after the statements match the historical header.
    block.push_str(&format!("   {GUARD_TYPE}<T> m; \n"));
    if options.warning_pragmas {
        block.push_str(&pragma_push());
    }
    block.push_str(&format!(
        "   new(m.allocate()) T({}); \n",
        comma_list(&signature.call_args())
    ));
    if options.warning_pragmas {
        block.push_str(PRAGMA_POP);
    }
    block.push_str("   return m.finalize();\n}\n");
    block
}

fn pragma_push() -> String {
    format!(
        "#ifdef WIN32\n#pragma warning(push)\n#pragma warning(disable: {SUPPRESSED_WARNING})\n#endif\n"
    )
}

const PRAGMA_POP: &str = "#ifdef WIN32\n#pragma warning(pop)\n#endif\n";

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ZERO_ARITY: &str = concat!(
        "template <typename T>\n",
        "T * tpie_unsafe_new() {\n",
        "   allocation_scope_magic<T> m; \n",
        "#ifdef WIN32\n",
        "#pragma warning(push)\n",
        "#pragma warning(disable: 4345)\n",
        "#endif\n",
        "   new(m.allocate()) T(); \n",
        "#ifdef WIN32\n",
        "#pragma warning(pop)\n",
        "#endif\n",
        "   return m.finalize();\n",
        "}\n",
    );

    #[test]
    fn zero_arity_has_no_dangling_separators() {
        let text = render(UnsafeSignature::new(0), &RenderOptions::default());
        assert_eq!(text, ZERO_ARITY);
    }

    #[test]
    fn two_arguments_forward_in_order() {
        let text = render(UnsafeSignature::new(2), &RenderOptions::default());
        assert!(text.starts_with("template <typename T, typename T0, typename T1>\n"));
        assert!(text.contains("T * tpie_unsafe_new(T0 t0, T1 t1) {\n"));
        assert!(text.contains("   new(m.allocate()) T(t0, t1); \n"));
    }

    #[test]
    fn pragmas_bracket_only_the_construction() {
        let text = render(UnsafeSignature::new(1), &RenderOptions::default());
        let guard = text.find("m; \n").expect("guard declaration");
        let push = text.find("#pragma warning(push)").expect("push pragma");
        let construct = text.find("new(m.allocate())").expect("placement new");
        let pop = text.find("#pragma warning(pop)").expect("pop pragma");
        let finalize = text.find("return m.finalize();").expect("finalize");
        assert!(guard < push && push < construct && construct < pop && pop < finalize);
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(19)]
    fn omitting_pragmas_drops_preprocessor_lines(#[case] arity: usize) {
        let options = RenderOptions {
            warning_pragmas: false,
        };
        let text = render(UnsafeSignature::new(arity), &options);
        assert!(!text.contains('#'), "no preprocessor lines expected: {text}");
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn widest_arity_lists_all_arguments() {
        let text = render(UnsafeSignature::new(19), &RenderOptions::default());
        assert!(text.contains("typename T18>"));
        assert!(text.contains("T18 t18) {"));
        assert!(text.contains("t17, t18); \n"));
        assert!(!text.contains("T19"));
    }
}
