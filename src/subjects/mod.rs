//! Built-in hardening subjects
//!
//! The catalog shipped with hardentools. Every entry is a [`ValueSubject`]
//! or a group of them. Entries that touch `HKLM` need elevated rights.

mod value;

use std::sync::Arc;

pub use value::ValueSubject;

use crate::core::models::SubjectInfo;
use crate::core::ports::SettingsBackend;
use crate::core::services::{Catalog, CatalogError, SubjectGroup};

/// Office versions whose per-application policies are covered
const OFFICE_VERSIONS: [&str; 3] = ["14.0", "15.0", "16.0"];

/// Office applications that embed OLE objects and run macros
const OFFICE_APPS: [&str; 3] = ["Word", "Excel", "PowerPoint"];

const ACROBAT_READER: &str = r"HKCU\Software\Adobe\Acrobat Reader\DC";

const EXPLORER_POLICIES: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Policies\Explorer";

/// Build the full hardentools catalog over `backend`
pub fn builtin(backend: &Arc<dyn SettingsBackend>) -> Result<Catalog, CatalogError> {
    let leaf = |name: &str, key: &str, value: &str, hardened: u32| {
        ValueSubject::new(SubjectInfo::new(name, name, ""), key, value, hardened, Arc::clone(backend))
    };
    let originals = format!(r"{ACROBAT_READER}\Originals");
    let trust_manager = format!(r"{ACROBAT_READER}\TrustManager");

    Catalog::builder()
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "WSH",
                "Windows Script Host",
                "Disable the Windows Script Host so .js and .vbs attachments cannot run",
            ),
            r"HKCU\Software\Microsoft\Windows Script Host\Settings",
            "Enabled",
            0,
            Arc::clone(backend),
        ))
        .group(office_group(
            SubjectInfo::new(
                "OfficeOLE",
                "Office Packager Objects (OLE)",
                "Block activation of embedded OLE packager objects in Office documents",
            ),
            "Security",
            "PackagerPrompt",
            2,
            backend,
        ))
        .group(office_group(
            SubjectInfo::new(
                "OfficeMacros",
                "Office Macros",
                "Disable all Office macros without notification",
            ),
            "Security",
            "VBAWarnings",
            4,
            backend,
        ))
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "OfficeActiveX",
                "Office ActiveX",
                "Disable ActiveX controls in Office documents",
            ),
            r"HKCU\Software\Microsoft\Office\Common\Security",
            "DisableAllActiveX",
            1,
            Arc::clone(backend),
        ))
        .group(office_dde(backend))
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "AdobePDFJS",
                "Acrobat Reader JavaScript",
                "Disable JavaScript in PDF documents",
            ),
            format!(r"{ACROBAT_READER}\JSPrefs"),
            "bEnableJS",
            0,
            Arc::clone(backend),
        ))
        .group(
            SubjectGroup::new(SubjectInfo::new(
                "AdobePDFObjects",
                "Acrobat Reader Embedded Objects",
                "Refuse to open files embedded in PDF documents",
            ))
            .with(leaf("AdobePDFObjects_Allow", &originals, "bAllowOpenFile", 0))
            .with(leaf("AdobePDFObjects_Secure", &originals, "bSecureOpenFile", 1)),
        )
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "AdobePDFProtectedMode",
                "Acrobat Reader Protected Mode",
                "Run Acrobat Reader in its sandbox",
            ),
            format!(r"{ACROBAT_READER}\Privileged"),
            "bProtectedMode",
            1,
            Arc::clone(backend),
        ))
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "AdobePDFProtectedView",
                "Acrobat Reader Protected View",
                "Open every PDF in Protected View",
            ),
            trust_manager.clone(),
            "iProtectedView",
            1,
            Arc::clone(backend),
        ))
        .group(
            SubjectGroup::new(SubjectInfo::new(
                "AdobePDFEnhancedSecurity",
                "Acrobat Reader Enhanced Security",
                "Enable enhanced security standalone and in the browser",
            ))
            .with(leaf(
                "AdobePDFEnhancedSecurity_Standalone",
                &trust_manager,
                "bEnhancedSecurityStandalone",
                1,
            ))
            .with(leaf(
                "AdobePDFEnhancedSecurity_Browser",
                &trust_manager,
                "bEnhancedSecurityInBrowser",
                1,
            )),
        )
        .group(
            SubjectGroup::new(SubjectInfo::new(
                "Autorun",
                "AutoRun and AutoPlay",
                "Disable AutoRun and AutoPlay for every drive type",
            ))
            .with(leaf("Autorun_DriveTypes", EXPLORER_POLICIES, "NoDriveTypeAutoRun", 0xb5))
            .with(leaf("Autorun_Disabled", EXPLORER_POLICIES, "NoAutorun", 1)),
        )
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "PowerShell",
                "PowerShell and cmd.exe",
                "Prevent powershell.exe, powershell_ise.exe and cmd.exe from being started",
            ),
            EXPLORER_POLICIES,
            "DisallowRun",
            1,
            Arc::clone(backend),
        ))
        .subject(
            ValueSubject::new(
                SubjectInfo::new(
                    "UAC",
                    "UAC Prompt",
                    "Ask administrators for credentials on the secure desktop",
                ),
                r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Policies\System",
                "ConsentPromptBehaviorAdmin",
                1,
                Arc::clone(backend),
            )
            .with_default(5),
        )
        .subject(
            ValueSubject::new(
                SubjectInfo::new(
                    "ShowFileExt",
                    "Show File Extensions",
                    "Show file name extensions in Explorer",
                ),
                r"HKCU\Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                "HideFileExt",
                0,
                Arc::clone(backend),
            )
            .with_default(1),
        )
        .subject(ValueSubject::new(
            SubjectInfo::new(
                "WindowsASR",
                "Windows ASR Rules",
                "Enable Windows Defender attack surface reduction rules",
            ),
            r"HKLM\SOFTWARE\Policies\Microsoft\Windows Defender\Windows Defender Exploit Guard\ASR",
            "ExploitGuard_ASR_Rules",
            1,
            Arc::clone(backend),
        ))
        .build()
}

/// One value per Office application and version, under `<app>\<section>`
fn office_group(
    info: SubjectInfo,
    section: &str,
    value: &str,
    hardened: u32,
    backend: &Arc<dyn SettingsBackend>,
) -> SubjectGroup {
    let prefix = info.name.clone();
    let mut group = SubjectGroup::new(info);
    for version in OFFICE_VERSIONS {
        for app in OFFICE_APPS {
            let name = format!("{prefix}_{app}{}", version.replace(".0", ""));
            group = group.with(ValueSubject::new(
                SubjectInfo::new(name.clone(), name, ""),
                format!(r"HKCU\Software\Microsoft\Office\{version}\{app}\{section}"),
                value,
                hardened,
                Arc::clone(backend),
            ));
        }
    }
    group
}

/// Stop Word and Excel from updating links and launching DDE servers
fn office_dde(backend: &Arc<dyn SettingsBackend>) -> SubjectGroup {
    let mut group = SubjectGroup::new(SubjectInfo::new(
        "OfficeDDE",
        "Office DDE Links",
        "Disable dynamic data exchange and automatic link updates in Word and Excel",
    ));
    for version in OFFICE_VERSIONS {
        let short = version.replace(".0", "");
        let members = [
            ("Word", "DontUpdateLinks", 1),
            ("Excel", "DontUpdateLinks", 1),
            ("Excel", "DDEAllowed", 0),
            ("Excel", "DDECleaned", 1),
        ];
        for (app, value, hardened) in members {
            let name = format!("OfficeDDE_{app}{short}_{value}");
            group = group.with(ValueSubject::new(
                SubjectInfo::new(name.clone(), name, ""),
                format!(r"HKCU\Software\Microsoft\Office\{version}\{app}\Options"),
                value,
                hardened,
                Arc::clone(backend),
            ));
        }
    }
    group
}
