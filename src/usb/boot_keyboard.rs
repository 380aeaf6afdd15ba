//! HID interface declared as a boot keyboard (subclass 1, protocol 1).
//!
//! `embassy_usb::class::hid` always writes subclass and protocol 0, which
//! BIOS and other boot-protocol hosts skip.  This builds the same
//! interface by hand and routes its class requests through
//! [`ClassState`].

use core::mem::MaybeUninit;

use defmt::trace;
use embassy_usb::control::{InResponse, OutResponse, Recipient, Request, RequestType};
use embassy_usb::driver::{Driver, EndpointError, EndpointIn};
use embassy_usb::types::InterfaceNumber;
use embassy_usb::{Builder, Handler};
use sun2usb::hid::class::{self, ClassState, OutResult};
use sun2usb::hid::{HostRequest, ReportSnapshot};

pub struct Config {
    pub report_descriptor: &'static [u8],
    pub poll_ms: u8,
    pub max_packet_size: u16,
    /// Reports to answer GET_REPORT with.
    pub snapshot: fn() -> ReportSnapshot,
    /// Where decoded SET_REPORTs go.
    pub on_request: fn(HostRequest),
}

/// Storage for the control handler; must outlive the USB device.
pub struct State {
    control: MaybeUninit<Control>,
}

impl State {
    pub const fn new() -> Self {
        Self {
            control: MaybeUninit::uninit(),
        }
    }
}

/// Interrupt IN side of the interface.
pub struct BootKeyboard<'d, D: Driver<'d>> {
    ep_in: D::EndpointIn,
}

impl<'d, D: Driver<'d>> BootKeyboard<'d, D> {
    pub fn new(builder: &mut Builder<'d, D>, state: &'d mut State, config: Config) -> Self {
        let hid_descriptor = class::hid_descriptor(config.report_descriptor.len());

        let mut func = builder.function(
            class::USB_CLASS_HID,
            class::SUBCLASS_BOOT,
            class::PROTOCOL_KEYBOARD,
        );
        let mut iface = func.interface();
        let if_num = iface.interface_number();
        let mut alt = iface.alt_setting(
            class::USB_CLASS_HID,
            class::SUBCLASS_BOOT,
            class::PROTOCOL_KEYBOARD,
            None,
        );
        // The builder writes length and type itself.
        alt.descriptor(class::DESCRIPTOR_HID, &hid_descriptor[2..]);
        let ep_in = alt.endpoint_interrupt_in(config.max_packet_size, config.poll_ms);
        drop(func);

        let control = state.control.write(Control {
            if_num,
            report_descriptor: config.report_descriptor,
            hid_descriptor,
            class: ClassState::new(),
            snapshot: config.snapshot,
            on_request: config.on_request,
        });
        builder.handler(control);

        Self { ep_in }
    }

    /// Send one input report; it must fit a single packet.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        self.ep_in.write(report).await
    }
}

struct Control {
    if_num: InterfaceNumber,
    report_descriptor: &'static [u8],
    hid_descriptor: [u8; 9],
    class: ClassState,
    snapshot: fn() -> ReportSnapshot,
    on_request: fn(HostRequest),
}

impl Control {
    fn is_ours(&self, req: &Request) -> bool {
        req.index == self.if_num.0 as u16
    }
}

impl Handler for Control {
    fn reset(&mut self) {
        self.class = ClassState::new();
    }

    fn control_out(&mut self, req: Request, data: &[u8]) -> Option<OutResponse> {
        if (req.request_type, req.recipient) != (RequestType::Class, Recipient::Interface)
            || !self.is_ours(&req)
        {
            return None;
        }

        match self.class.control_out(req.request, req.value, data) {
            OutResult::Accepted(request) => {
                if let Some(request) = request {
                    (self.on_request)(request);
                }
                Some(OutResponse::Accepted)
            }
            OutResult::Rejected => {
                trace!("HID class OUT {=u8:#x} rejected", req.request);
                Some(OutResponse::Rejected)
            }
        }
    }

    fn control_in<'a>(&'a mut self, req: Request, buf: &'a mut [u8]) -> Option<InResponse<'a>> {
        if !self.is_ours(&req) {
            return None;
        }

        match (req.request_type, req.recipient) {
            (RequestType::Standard, Recipient::Interface) if req.request == Request::GET_DESCRIPTOR => {
                match (req.value >> 8) as u8 {
                    class::DESCRIPTOR_REPORT => Some(InResponse::Accepted(self.report_descriptor)),
                    class::DESCRIPTOR_HID => Some(InResponse::Accepted(&self.hid_descriptor)),
                    _ => Some(InResponse::Rejected),
                }
            }
            (RequestType::Class, Recipient::Interface) => {
                let snapshot = (self.snapshot)();
                match self.class.control_in(req.request, req.value, &snapshot, buf) {
                    Some(n) => Some(InResponse::Accepted(&buf[..n])),
                    None => {
                        trace!("HID class IN {=u8:#x} rejected", req.request);
                        Some(InResponse::Rejected)
                    }
                }
            }
            _ => None,
        }
    }
}
