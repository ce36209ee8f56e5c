// Fixed Lua tokens. Each row gives the effect on indentation, the method name and the
// emitted text:
//   plain - appends the text
//   open  - appends the text and opens a block
//   close - closes a block with the text on a new line at the outer level
//   cont  - like close, then opens a new block, e.g., `else`
use crate::LuaBuilder;

macro_rules! token_methods {
    ($($effect:ident $name:ident $text:literal;)*) => {
        impl LuaBuilder {
            $(token_methods!(@method $effect $name $text);)*
        }
    };
    (@method plain $name:ident $text:literal) => {
        #[doc = concat!("Appends `", $text, "`.")]
        pub fn $name(&mut self) -> &mut Self {
            self.append($text)
        }
    };
    (@method open $name:ident $text:literal) => {
        #[doc = concat!("Appends `", $text, "` and opens a block.")]
        pub fn $name(&mut self) -> &mut Self {
            self.open_block($text)
        }
    };
    (@method close $name:ident $text:literal) => {
        #[doc = concat!("Closes a block with `", $text, "` on a new line, lined up with the opening construct.")]
        pub fn $name(&mut self) -> crate::Result<&mut Self> {
            self.close_block($text)
        }
    };
    (@method cont $name:ident $text:literal) => {
        #[doc = concat!("Closes a branch with `", $text, "` on a new line and opens the next branch.")]
        pub fn $name(&mut self) -> crate::Result<&mut Self> {
            self.continue_block($text)
        }
    };
}

token_methods! {
    plain nil "nil";
    plain true_ "true";
    plain false_ "false";
    plain varargs "...";
    plain break_ "break";

    open do_ "do";
    open repeat "repeat";
    close end "end";
    cont else_ "else";

    plain add " + ";
    plain sub " - ";
    plain mul " * ";
    plain div " / ";
    plain floor_div " // ";
    plain modulo " % ";
    plain pow " ^ ";
    plain concat " .. ";

    plain eq " == ";
    plain ne " ~= ";
    plain lt " < ";
    plain le " <= ";
    plain gt " > ";
    plain ge " >= ";
    plain and " and ";
    plain or " or ";
    plain not "not ";
    plain neg "-";
    plain len "#";

    plain band " & ";
    plain bor " | ";
    plain bxor " ~ ";
    plain shl " << ";
    plain shr " >> ";
    plain bnot "~";

    plain assign_op " = ";
    plain comma ", ";
    plain semicolon ";";
    plain dot ".";
    plain colon ":";
    plain open_paren "(";
    plain close_paren ")";
    plain open_bracket "[";
    plain close_bracket "]";
    plain open_brace "{";
    plain close_brace "}";
    plain space " ";
}
