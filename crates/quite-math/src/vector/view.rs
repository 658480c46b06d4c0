//! Named field access (`v.x`, `v.y`, ...) for small vectors.
//!
//! Each view is a `#[repr(C)]` struct with the same layout as `[T; N]`, so a vector can be
//! reinterpreted as its view in place. The zero-sized `_priv` field keeps views from being
//! constructed outside of this module.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $view:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[doc = concat!("Field view of a ", stringify!($n), "-element [`Vector`].")]
            #[repr(C)]
            pub struct $view<T> {
                $(pub $field: T,)+
                _priv: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Same size and alignment as `[T; N]`, see module docs.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use crate::{vec3, Vec2d, Vec4f};

    use super::*;

    #[test]
    fn layout_matches_arrays() {
        assert_eq!(size_of::<XY<f64>>(), size_of::<Vec2d>());
        assert_eq!(size_of::<XYZW<f32>>(), size_of::<Vec4f>());
        assert_eq!(align_of::<XYZ<f32>>(), align_of::<[f32; 3]>());
    }

    #[test]
    fn fields_alias_elements() {
        let mut v = vec3(1.0f32, 2.0, 3.0);
        v.z = -v.x;
        v.y += 0.5;
        assert_eq!(v, [1.0, 2.5, -1.0]);
        assert_eq!(v[2], v.z);
    }
}
