//! Defines helper macros for generating client error enums.

macro_rules! define_client_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_client_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_client_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_client_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_client_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the constructor generator.

    define_client_error! {
        /// Errors used to exercise the generated constructors.
        pub enum ExampleClientError {
            /// Unit variant.
            Empty => "empty",
            /// Single string field.
            Foo { message: String } => "foo: {message}",
            /// Numeric field.
            Bar { count: u16 } => "bar: {count}",
            /// Mixed fields with an optional payload.
            Baz { message: String, hint: Option<String> } => "baz: {message}",
        }
    }

    #[test]
    fn unit_constructor_builds_variant() {
        assert_eq!(ExampleClientError::empty(), ExampleClientError::Empty);
        assert_eq!(ExampleClientError::empty().to_string(), "empty");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExampleClientError::foo("hello");
        assert_eq!(err.to_string(), "foo: hello");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExampleClientError::bar(422_u16);
        assert_eq!(err.to_string(), "bar: 422");
    }

    #[test]
    fn constructors_lift_values_into_options() {
        let err = ExampleClientError::baz("hello", "retry later".to_owned());
        assert_eq!(
            err,
            ExampleClientError::Baz {
                message: "hello".to_owned(),
                hint: Some("retry later".to_owned()),
            }
        );
    }
}
