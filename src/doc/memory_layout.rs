/*!
# Memory Layout

Commodore BASIC keeps its bookkeeping in zero page. Seven little-endian
words starting at `$2B` split the BASIC memory into regions.

| Address | Name   | Meaning                                   |
|---------|--------|-------------------------------------------|
| `$2B`   | TXTTAB | Start of the program text                 |
| `$2D`   | VARTAB | Start of the scalar variable table        |
| `$2F`   | ARYTAB | Start of the array table                  |
| `$31`   | STREND | End of the array table                    |
| `$33`   | FRETOP | Top of the string stack                   |
| `$35`   | FRESPC | Last string allocated (not used here)     |
| `$37`   | MEMSIZ | End of BASIC memory                       |

## Scalars
Every scalar takes seven bytes. The first two are the name, one or two
characters with bit 7 used as a type tag.

| Bit 7 of 1st | Bit 7 of 2nd | Type     | Remaining five bytes                  |
|--------------|--------------|----------|---------------------------------------|
| 1            | 1            | `A%`     | value, big endian, then three unused  |
| 0            | 0            | `A`      | exponent, four mantissa bytes         |
| 0            | 1            | `A$`     | length, pointer, then two unused      |
| 1            | 0            | `FN A`   | definition pointer, variable pointer, one unknown byte |

Integers are the only big endian field. Everything else is little endian.

## Floating Point
The exponent byte is biased by 128 and zero means the value is zero. The
mantissa is a fraction between one half and one. Its top bit is always one
so that bit holds the sign instead.

## Arrays
```text
name(2) size(2, little endian) dims(1) count(2, big endian) ... elements
```
The counts run from the last dimension to the first and are one more than
the bound given to `DIM`. So `DIM A(3,5)` stores `6` then `4`. String arrays
hold a 3-byte descriptor per element, just like a string scalar.

## The String Stack
Strings built at run time live between `FRETOP` and `MEMSIZ`. Each new one
moves `FRETOP` down toward the arrays. Strings in the program text stay
where they are. Any
byte between `FRETOP` and `MEMSIZ` that no variable points at is garbage
waiting for the next collection; these runs are reported at the end.
```text
String Heap Garbage [$9FE0:$9FE6]: "HELLO "
```
A `*` after a string value marks a string that lives on the string stack.
*/
