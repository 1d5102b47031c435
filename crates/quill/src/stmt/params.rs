use quill_core::stmt::Value;

/// Values bound to the placeholders of a raw fragment, in order.
///
/// Implemented for `()`, tuples and arrays of values, and `Vec`s.
pub trait Params {
    fn into_params(self) -> Vec<Value>;
}

impl Params for () {
    fn into_params(self) -> Vec<Value> {
        vec![]
    }
}

impl<T: Into<Value>> Params for Vec<T> {
    fn into_params(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> Params for [T; N] {
    fn into_params(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! impl_params_for_tuple {
    ( $( $name:ident ),+ ) => {
        impl< $( $name: Into<Value> ),+ > Params for ( $( $name, )+ ) {
            #[allow(non_snake_case)]
            fn into_params(self) -> Vec<Value> {
                let ( $( $name, )+ ) = self;
                vec![ $( $name.into() ),+ ]
            }
        }
    };
}

impl_params_for_tuple!(A);
impl_params_for_tuple!(A, B);
impl_params_for_tuple!(A, B, C);
impl_params_for_tuple!(A, B, C, D);
impl_params_for_tuple!(A, B, C, D, E);
impl_params_for_tuple!(A, B, C, D, E, F);
