//! Input location, generated file locations and their fixed boilerplate.
//!
//! All paths are relative to the root of the Android source tree.

use crate::render::{Flavor, Layout, Table};

pub const PROP_AIDL_FILE_PATH: &str = "hardware/interfaces/automotive/vehicle/aidl_property/\
                                       android/hardware/automotive/vehicle/VehicleProperty.aidl";

/// File name used to recognize the input among changed files.
pub const PROP_AIDL_FILE_NAME: &str = "VehicleProperty.aidl";

const CPP_DIR: &str = "hardware/interfaces/automotive/vehicle/aidl/generated_lib/cpp";
const JAVA_DIR: &str = "hardware/interfaces/automotive/vehicle/aidl/generated_lib/java";

/// One generated file and how to render it.
#[derive(Debug, Clone, Copy)]
pub struct GeneratedFile {
    pub dir: &'static str,
    pub file_name: &'static str,
    pub layout: Layout,
}

impl GeneratedFile {
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.dir, self.file_name)
    }
}

pub const GENERATED_FILES: [GeneratedFile; 5] = [
    GeneratedFile {
        dir: CPP_DIR,
        file_name: "ChangeModeForVehicleProperty.h",
        layout: Layout {
            preamble: LICENSE,
            header: CHANGE_MODE_CPP_HEADER,
            footer: CHANGE_MODE_CPP_FOOTER,
            table: Table::ChangeMode(Flavor::Cpp),
        },
    },
    GeneratedFile {
        dir: JAVA_DIR,
        file_name: "ChangeModeForVehicleProperty.java",
        layout: Layout {
            preamble: LICENSE,
            header: CHANGE_MODE_JAVA_HEADER,
            footer: JAVA_FOOTER,
            table: Table::ChangeMode(Flavor::Java),
        },
    },
    GeneratedFile {
        dir: CPP_DIR,
        file_name: "AccessForVehicleProperty.h",
        layout: Layout {
            preamble: LICENSE,
            header: ACCESS_CPP_HEADER,
            footer: ACCESS_CPP_FOOTER,
            table: Table::AccessMode(Flavor::Cpp),
        },
    },
    GeneratedFile {
        dir: JAVA_DIR,
        file_name: "AccessForVehicleProperty.java",
        layout: Layout {
            preamble: LICENSE,
            header: ACCESS_JAVA_HEADER,
            footer: JAVA_FOOTER,
            table: Table::AccessMode(Flavor::Java),
        },
    },
    GeneratedFile {
        dir: JAVA_DIR,
        file_name: "EnumForVehicleProperty.java",
        layout: Layout {
            preamble: LICENSE,
            header: ENUM_JAVA_HEADER,
            footer: JAVA_FOOTER,
            table: Table::EnumTypes,
        },
    },
];

// -- Boilerplate --------------------------------------------------------------

const LICENSE: &str = r#"/*
 * Copyright (C) 2023 The Android Open Source Project
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/**
 * DO NOT EDIT MANUALLY!!!
 *
 * Generated by vhal-annotations.
 */

// clang-format off

"#;

const CHANGE_MODE_CPP_HEADER: &str = r#"#ifndef android_hardware_automotive_vehicle_aidl_generated_lib_ChangeModeForVehicleProperty_H_
#define android_hardware_automotive_vehicle_aidl_generated_lib_ChangeModeForVehicleProperty_H_

#include <aidl/android/hardware/automotive/vehicle/VehicleProperty.h>
#include <aidl/android/hardware/automotive/vehicle/VehiclePropertyChangeMode.h>

#include <unordered_map>

namespace aidl {
namespace android {
namespace hardware {
namespace automotive {
namespace vehicle {

std::unordered_map<VehicleProperty, VehiclePropertyChangeMode> ChangeModeForVehicleProperty = {
"#;

const CHANGE_MODE_CPP_FOOTER: &str = r#"
};

}  // namespace vehicle
}  // namespace automotive
}  // namespace hardware
}  // namespace android
}  // aidl

#endif  // android_hardware_automotive_vehicle_aidl_generated_lib_ChangeModeForVehicleProperty_H_
"#;

const ACCESS_CPP_HEADER: &str = r#"#ifndef android_hardware_automotive_vehicle_aidl_generated_lib_AccessForVehicleProperty_H_
#define android_hardware_automotive_vehicle_aidl_generated_lib_AccessForVehicleProperty_H_

#include <aidl/android/hardware/automotive/vehicle/VehicleProperty.h>
#include <aidl/android/hardware/automotive/vehicle/VehiclePropertyAccess.h>

#include <unordered_map>

namespace aidl {
namespace android {
namespace hardware {
namespace automotive {
namespace vehicle {

std::unordered_map<VehicleProperty, VehiclePropertyAccess> AccessForVehicleProperty = {
"#;

const ACCESS_CPP_FOOTER: &str = r#"
};

}  // namespace vehicle
}  // namespace automotive
}  // namespace hardware
}  // namespace android
}  // aidl

#endif  // android_hardware_automotive_vehicle_aidl_generated_lib_AccessForVehicleProperty_H_
"#;

const CHANGE_MODE_JAVA_HEADER: &str = r#"package android.hardware.automotive.vehicle;

import java.util.Map;

public final class ChangeModeForVehicleProperty {

    public static final Map<Integer, Integer> values = Map.ofEntries(
"#;

const ACCESS_JAVA_HEADER: &str = r#"package android.hardware.automotive.vehicle;

import java.util.Map;

public final class AccessForVehicleProperty {

    public static final Map<Integer, Integer> values = Map.ofEntries(
"#;

const ENUM_JAVA_HEADER: &str = r#"package android.hardware.automotive.vehicle;

import java.util.List;
import java.util.Map;

public final class EnumForVehicleProperty {

    public static final Map<Integer, List<Class<?>>> values = Map.ofEntries(
"#;

const JAVA_FOOTER: &str = r#"
    );

}
"#;
