use crate::tag::ComparisonSign;

macro_rules! frag {
    ($dst:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.write_to($dst);
        )*
    }};
}

/// A piece of query text that knows how to append itself to the output
/// buffer.
pub(super) trait Fragment {
    fn write_to(self, dst: &mut String);
}

impl Fragment for &str {
    fn write_to(self, dst: &mut String) {
        dst.push_str(self);
    }
}

impl Fragment for &String {
    fn write_to(self, dst: &mut String) {
        dst.push_str(self);
    }
}

impl Fragment for String {
    fn write_to(self, dst: &mut String) {
        dst.push_str(&self);
    }
}

impl Fragment for char {
    fn write_to(self, dst: &mut String) {
        dst.push(self);
    }
}

impl Fragment for ComparisonSign {
    fn write_to(self, dst: &mut String) {
        dst.push_str(self.sign());
    }
}
