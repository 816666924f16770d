// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Creates a [`GeoPoint`](crate::geom::GeoPoint) from latitude and longitude.
#[macro_export]
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        $crate::geom::GeoPoint::new($latitude, $longitude)
    };
}

/// Creates a chain [`Node`](crate::apt::Node), optionally with a curve
/// control point after the semicolon.
#[macro_export]
macro_rules! node {
    ($latitude:expr, $longitude:expr) => {
        $crate::apt::Node::new($crate::coord!($latitude, $longitude))
    };

    ($latitude:expr, $longitude:expr; $ctrl_latitude:expr, $ctrl_longitude:expr) => {
        $crate::apt::Node::curve(
            $crate::coord!($latitude, $longitude),
            $crate::coord!($ctrl_latitude, $ctrl_longitude),
        )
    };
}

/// Declares an enum of numeric apt.dat codes with a conversion from the code
/// and the name under which the variant is exported.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Returns the apt.dat code.
            pub fn code(&self) -> u8 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// Returns the name used as attribute value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::Error;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    code => Err($crate::Error::InvalidCode { field: $field, code }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
