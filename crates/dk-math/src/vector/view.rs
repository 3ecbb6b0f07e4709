//! Named-component views of 2, 3 and 4-dimensional vectors.
//!
//! `Tensor` is `#[repr(transparent)]` over `[T; N]`, so it has the same layout as these
//! `#[repr(C)]` structs, which is what makes the reference transmutes below sound.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Vector2, Vector3, Vector4};

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($vector:ident => $view:ident) => {
        impl<T: Copy> Deref for $vector<T> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T: Copy> DerefMut for $vector<T> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector2 => XY);
view!(Vector3 => XYZ);
view!(Vector4 => XYZW);
