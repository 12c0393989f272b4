/// Implements the common value-type traits for a `#[repr(C)]` struct whose fields
/// all share the type parameter.
#[macro_export]
macro_rules! impl_standard_traits {
    ($type_name:ident, $type_param:ident, $count:literal, [$($field:ident),+ $(,)?]) => {
        impl<$type_param> Copy for $type_name<$type_param> where $type_param: Copy {}

        impl<$type_param> Clone for $type_name<$type_param>
        where
            $type_param: Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    $($field: self.$field.clone()),+
                }
            }
        }

        impl<$type_param> Default for $type_name<$type_param>
        where
            $type_param: Default,
        {
            #[inline]
            fn default() -> Self {
                Self {
                    $($field: Default::default()),+
                }
            }
        }

        impl<$type_param> core::fmt::Debug for $type_name<$type_param>
        where
            $type_param: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($type_name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }

        impl<$type_param> PartialEq for $type_name<$type_param>
        where
            $type_param: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> $type_name<$type_param>
        where
            $type_param: Default,
        {
            /// Reinterprets a slice of exactly as many elements as the struct has fields.
            #[allow(unused)]
            #[inline]
            pub fn from_slice(slice: &[$type_param]) -> &Self {
                assert_eq!(slice.len(), $count);

                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe { &*(slice.as_ptr() as *const Self) }
            }

            /// Reinterprets a mutable slice of exactly as many elements as the struct has fields.
            #[allow(unused)]
            #[inline]
            pub fn from_mut_slice(slice: &mut [$type_param]) -> &mut Self {
                assert_eq!(slice.len(), $count);

                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe { &mut *(slice.as_mut_ptr() as *mut Self) }
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::convert::AsRef<[$type_param]> for $type_name<$type_param> {
            fn as_ref(&self) -> &[$type_param] {
                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe { core::slice::from_raw_parts(self as *const _ as *const $type_param, $count) }
            }
        }

        #[cfg_attr(docsrs, doc(cfg(feature = "unsafe")))]
        #[cfg(feature = "unsafe")]
        impl<$type_param> core::convert::AsMut<[$type_param]> for $type_name<$type_param> {
            fn as_mut(&mut self) -> &mut [$type_param] {
                // SAFETY: $type_name only contains `$type_param` fields and is `repr(C)`
                unsafe {
                    core::slice::from_raw_parts_mut(self as *mut _ as *mut $type_param, $count)
                }
            }
        }

        #[cfg(test)]
        paste::paste! {
            #[cfg(test)]
            mod [<tests_gen_ $type_name:snake>] {
                use super::*;

                #[test]
                fn test_default_clone_and_debug() {
                    let value = $type_name::<u32>::default();
                    let copy = value;
                    assert_eq!(value.clone(), copy);

                    let debug = std::format!("{value:?}");
                    assert!(debug.starts_with(stringify!($type_name)));
                    $(assert!(debug.contains(stringify!($field)));)+
                }

                #[test]
                #[cfg(feature = "unsafe")]
                fn test_from_slice() {
                    let data = [0u32; $count + 1];
                    let value = $type_name::from_slice(&data[..$count]);
                    assert!(core::ptr::eq(value.as_ref().as_ptr(), data.as_ptr()));
                }

                #[test]
                #[cfg(feature = "unsafe")]
                fn test_from_mut_slice() {
                    let mut data = [0u32; $count + 1];
                    {
                        let value = $type_name::from_mut_slice(&mut data[..$count]);
                        value.as_mut()[0] = 10;
                    }
                    assert_eq!(data[0], 10, "expect data to be changed");
                }
            }
        }
    };
}

/// Emits a `tracing` event at TRACE level when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Emits a `tracing` event at DEBUG level when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Emits a `tracing` event at WARN level when the `tracing` feature is enabled.
macro_rules! warn_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
pub(crate) use warn_event;
